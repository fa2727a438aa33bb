//! Performance benchmarks for Storyline

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storyline::config::{Config, RenderConfig, SnippetConfig};
use storyline::interface::Assembler;
use storyline::io::MemorySource;
use storyline::readers::{extract_snippet, render_step_html, CmarkRenderer};

fn generate_step(num_blocks: usize, lines_per_block: usize) -> String {
    let mut md = String::from("# Benchmark Step\n\n");

    for i in 0..num_blocks {
        md.push_str(&format!("## Step {}: Section {}\n\n", i + 1, i));
        md.push_str("{% hint style=\"info\" %}\nRemember the **handle**.\n{% endhint %}\n\n");
        md.push_str("```typescript\n");
        for j in 0..lines_per_block {
            md.push_str(&format!("const value{}_{} = await contract.read({});\n", i, j, j));
        }
        md.push_str("```\n\n");
    }

    md.push_str("## Highlight Lines\n2-4\n");
    md
}

fn generate_source(num_steps: usize) -> Arc<MemorySource> {
    let source = Arc::new(MemorySource::new());

    let entries: Vec<String> = (0..num_steps)
        .map(|i| {
            format!(
                r#"{{"key": "step{i}", "title": "Step {i}", "copy": "Copy {i}.",
                    "subsections": [{{"key": "step{i}_detail", "title": "Detail", "copy": "More."}}]}}"#
            )
        })
        .collect();
    source.add_file("bench/story.json", format!("[{}]", entries.join(",")));

    for i in 0..num_steps {
        source.add_file(format!("bench/step{}.md", i), generate_step(3, 10));
    }

    source
}

fn bench_extract_snippet(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_snippet");
    let config = SnippetConfig::default();

    for num_blocks in [1, 10, 50, 200].iter() {
        let md = generate_step(*num_blocks, 10);
        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &md, |b, md| {
            b.iter(|| extract_snippet(black_box(md), &config))
        });
    }

    group.finish();
}

fn bench_render_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_step_html");
    let renderer = CmarkRenderer::new(RenderConfig::default());

    for num_blocks in [1, 10, 50].iter() {
        let md = generate_step(*num_blocks, 10);
        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &md, |b, md| {
            b.iter(|| render_step_html(black_box(md), &renderer))
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for num_steps in [5, 25, 100].iter() {
        let assembler = Assembler::with_source(generate_source(*num_steps), Config::default());
        group.bench_with_input(
            BenchmarkId::new("steps", num_steps),
            &assembler,
            |b, assembler| {
                b.iter(|| runtime.block_on(assembler.assemble(black_box("bench"))).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_snippet,
    bench_render_step,
    bench_assemble,
);

criterion_main!(benches);

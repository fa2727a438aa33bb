//! Callout blocks: `{% hint style="..." %} ... {% endhint %}`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Pattern for a whole callout, non-greedy so each close tag ends the nearest open tag.
static CALLOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)\{%\s*hint\s+style="(?P<style>[^"]+)"\s*%\}(?P<body>.*?)\{%\s*endhint\s*%\}"#)
        .unwrap()
});

/// Rewrites every callout into a styled `<div>`.
///
/// The style value is passed through as `hint-{style}`. Blank lines around the
/// body keep it parsed as markdown by the renderer.
pub fn rewrite_callouts(raw: &str) -> Cow<'_, str> {
    CALLOUT.replace_all(raw, |caps: &Captures| {
        format!(
            "<div class=\"hint hint-{}\">\n\n{}\n\n</div>",
            &caps["style"],
            caps["body"].trim()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_callout() {
        let input = "{% hint style=\"warning\" %}\n\nBe careful\n\n{% endhint %}";
        assert_eq!(
            rewrite_callouts(input),
            "<div class=\"hint hint-warning\">\n\nBe careful\n\n</div>"
        );
    }

    #[test]
    fn test_multiple_callouts() {
        let input = "\
Intro
{% hint style=\"info\" %}
First
{% endhint %}
Middle
{%hint style=\"success\"%}Second{%endhint%}
End";
        let output = rewrite_callouts(input);

        assert!(output.contains("<div class=\"hint hint-info\">\n\nFirst\n\n</div>"));
        assert!(output.contains("<div class=\"hint hint-success\">\n\nSecond\n\n</div>"));
        assert!(output.starts_with("Intro\n"));
        assert!(output.contains("\nMiddle\n"));
        assert!(output.ends_with("\nEnd"));
    }

    #[test]
    fn test_unknown_style_passed_through() {
        let output = rewrite_callouts("{% hint style=\"custom-note\" %}x{% endhint %}");
        assert!(output.contains("hint-custom-note"));
    }

    #[test]
    fn test_first_close_ends_nearest_open() {
        let input = "{% hint style=\"info\" %}a{% hint style=\"danger\" %}b{% endhint %}c{% endhint %}";
        let output = rewrite_callouts(input);

        assert!(output.starts_with("<div class=\"hint hint-info\">"));
        assert!(output.ends_with("c{% endhint %}"));
    }

    #[test]
    fn test_unclosed_callout_untouched() {
        let input = "{% hint style=\"info\" %}\nno end";
        assert_eq!(rewrite_callouts(input), input);
    }
}

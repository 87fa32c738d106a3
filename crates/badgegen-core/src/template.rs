/// Result of substituting a placeholder into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    /// Number of placeholder occurrences that were replaced.
    pub replacements: usize,
}

/// Replace every literal occurrence of `placeholder` in `template` with `value`.
///
/// A placeholder that does not appear leaves the template unchanged. An empty
/// placeholder is never matched.
pub fn substitute(template: &str, placeholder: &str, value: &str) -> Rendered {
    if placeholder.is_empty() {
        return Rendered {
            body: template.to_string(),
            replacements: 0,
        };
    }
    let replacements = template.matches(placeholder).count();
    let body = if replacements == 0 {
        template.to_string()
    } else {
        template.replace(placeholder, value)
    };
    Rendered { body, replacements }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_iteration_token() {
        let r = substitute("<text>//ITER//</text>", "//ITER//", "42");
        assert_eq!(r.body, "<text>42</text>");
        assert_eq!(r.replacements, 1);
    }

    #[test]
    fn absent_token_is_identity() {
        let svg = "<svg><text>static</text></svg>";
        let r = substitute(svg, "//DATE//", "10/19/2026");
        assert_eq!(r.body, svg);
        assert_eq!(r.replacements, 0);
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let r = substitute("//ITER// of //ITER//", "//ITER//", "3");
        assert_eq!(r.body, "3 of 3");
        assert_eq!(r.replacements, 2);
    }

    #[test]
    fn value_is_inserted_verbatim() {
        let r = substitute("<t>//ITER//</t>", "//ITER//", "42\n");
        assert_eq!(r.body, "<t>42\n</t>");
    }

    #[test]
    fn empty_placeholder_never_matches() {
        let r = substitute("abc", "", "x");
        assert_eq!(r.body, "abc");
        assert_eq!(r.replacements, 0);
    }
}

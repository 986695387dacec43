#![allow(clippy::uninlined_format_args)]

/// Test that \p pattern fails to parse.
#[track_caller]
pub fn test_parse_fails(pattern: &str) {
    let res = minirex::Regex::new(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {}", pattern);
}

/// Format a Match by inserting commas between all capture groups.
fn format_match(r: &minirex::Match, input: &str) -> String {
    let mut result = input[r.range()].to_string();
    for cg in r.captures.iter() {
        result.push(',');
        if let Some(cg) = cg {
            result.push_str(&input[cg.clone()])
        }
    }
    result
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    #[track_caller]
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

pub trait VecTestHelpers {
    /// "Fluent" style helper for testing that a Vec<&str> is equal to a
    /// Vec<&str>.
    fn test_eq(&self, rhs: Vec<&str>);
}

impl VecTestHelpers for Vec<&str> {
    #[track_caller]
    fn test_eq(&self, rhs: Vec<&str>) {
        assert_eq!(*self, rhs)
    }
}

/// A compiled regex which remembers a TestConfig.
#[derive(Debug, Clone)]
pub struct TestCompiledRegex {
    re: minirex::Regex,
    tc: TestConfig,
}

impl TestCompiledRegex {
    /// Access the underlying regex.
    pub fn regex(&self) -> &minirex::Regex {
        &self.re
    }

    /// Search for self in \p input, returning a list of all matches.
    pub fn matches(&self, input: &str) -> Vec<minirex::Match> {
        if self.tc.use_ascii(input) {
            self.re.find_iter_bytes(input.as_bytes()).collect()
        } else {
            self.re.find_iter(input).collect()
        }
    }

    /// Search for self in \p input, returning the first Match, or None if
    /// none.
    pub fn find(&self, input: &str) -> Option<minirex::Match> {
        if self.tc.use_ascii(input) {
            self.re.find_bytes(input.as_bytes())
        } else {
            self.re.find(input)
        }
    }

    /// Match self against all of \p input.
    pub fn full(&self, input: &str) -> Option<minirex::Match> {
        if self.tc.use_ascii(input) {
            self.re.full_match_bytes(input.as_bytes())
        } else {
            self.re.full_match(input)
        }
    }

    /// Match against a string, returning the first formatted match.
    #[track_caller]
    pub fn match1f(&self, input: &str) -> String {
        match self.find(input) {
            Some(m) => format_match(&m, input),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Match against all of a string, returning the formatted match.
    #[track_caller]
    pub fn full1f(&self, input: &str) -> String {
        match self.full(input) {
            Some(m) => format_match(&m, input),
            None => panic!("Failed to fully match {}", input),
        }
    }

    /// Match against a string, returning the match as a Vec containing None
    /// for unmatched groups, or the matched strings.
    #[track_caller]
    pub fn match1_vec<'b>(&self, input: &'b str) -> Vec<Option<&'b str>> {
        let m = match self.find(input) {
            Some(m) => m,
            None => panic!("Failed to match {}", input),
        };
        m.groups().map(|g| g.map(|r| &input[r])).collect()
    }

    /// Return the range of the first match.
    #[track_caller]
    pub fn match1_range(&self, input: &str) -> minirex::Range {
        match self.find(input) {
            Some(m) => m.range(),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Test that matching against \p input fails.
    #[track_caller]
    pub fn test_fails(&self, input: &str) {
        assert!(self.find(input).is_none(), "Should not have matched {}", input)
    }

    /// Test that matching against \p input succeeds.
    #[track_caller]
    pub fn test_succeeds(&self, input: &str) {
        assert!(self.find(input).is_some(), "Should have matched {}", input)
    }

    /// Test that \p input is matched in its entirety.
    #[track_caller]
    pub fn test_full(&self, input: &str) {
        assert!(self.full(input).is_some(), "Should have fully matched {}", input)
    }

    /// Test that \p input is not matched in its entirety.
    #[track_caller]
    pub fn test_not_full(&self, input: &str) {
        assert!(
            self.full(input).is_none(),
            "Should not have fully matched {}",
            input
        )
    }

    /// Return a list of all non-overlapping matches.
    pub fn match_all<'b>(&self, input: &'b str) -> Vec<&'b str> {
        self.matches(input)
            .into_iter()
            .map(move |m| &input[m.range()])
            .collect()
    }

    /// Collect all matches into a String, separated by commas.
    pub fn run_global_match(&self, input: &str) -> String {
        self.matches(input)
            .into_iter()
            .map(move |m| format_match(&m, input))
            .collect::<Vec<String>>()
            .join(",")
    }
}

/// Description of how to test a regex.
#[derive(Debug, Copy, Clone)]
pub struct TestConfig {
    // Whether to prefer byte matching if the input is ASCII.
    ascii: bool,
}

impl TestConfig {
    /// Whether to use ASCII for this input.
    pub fn use_ascii(&self, s: &str) -> bool {
        self.ascii && s.is_ascii()
    }

    /// Compile a pattern to a regex.
    #[track_caller]
    pub fn compile(&self, pattern: &str) -> TestCompiledRegex {
        let re = match minirex::Regex::new(pattern) {
            Ok(re) => re,
            Err(err) => panic!("Failed to parse! pattern: {}, error: {}", pattern, err),
        };
        TestCompiledRegex { re, tc: *self }
    }

    /// Test that \p pattern successfully parses, and matches \p input.
    #[track_caller]
    pub fn test_match_succeeds(&self, pattern: &str, input: &str) {
        self.compile(pattern).test_succeeds(input)
    }

    /// Test that \p pattern successfully parses, and does not match \p input.
    #[track_caller]
    pub fn test_match_fails(&self, pattern: &str, input: &str) {
        self.compile(pattern).test_fails(input)
    }
}

/// Invoke \p F with each test config, in turn.
pub fn test_with_configs<F>(func: F)
where
    F: Fn(TestConfig),
{
    func(TestConfig { ascii: true });
    func(TestConfig { ascii: false });
}

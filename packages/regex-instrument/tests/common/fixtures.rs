//! JavaScript fixture programs

/// Statements that construct no regex
pub const PLAIN_STATEMENTS: &[&str] = &[
    "const a = 1;",
    "let b = a / 2 / 3;",
    "// a comment mentioning /x/ and new RegExp('y')",
    "const s = '/not a regex/';",
    "function twice(x) { return x * 2; }",
    "if (a) { b = 2; } else { b = 3; }",
    "const t = `tmpl ${a} /still/ text`;",
    "/* block\n   comment */",
    "const o = { RegExp: 1, re: 'new RegExp()' };",
    "class Box { constructor(v) { this.v = v; } }",
];

/// Statements with at least one construction site, with their site count
pub const REGEX_STATEMENTS: &[(&str, usize)] = &[
    ("const r1 = /ab+c/gi;", 1),
    ("const r2 = new RegExp('x', 'g');", 1),
    ("const r3 = RegExp(pat);", 1),
    ("foo(/y/, new RegExp(p + 'z'));", 2),
    ("/w/.test(s) && go();", 1),
    ("const r4 = new RegExp(String(/in/).slice(1, -1), f);", 2),
    ("const r5 = new RegExp;", 1),
    ("function local(RegExp) { return new RegExp('q'); }", 1),
    ("const r6 = new RegExp(\n  pat, // comment\n  'm'\n);", 1),
    ("for (const m of s.matchAll(/(\\d+)/g)) use(m);", 1),
];

/// Program printing the results of a few regex operations
pub const SIDE_EFFECT_PROGRAM: &str = r#"let calls = 0;
function computePattern() { calls++; return "a+"; }
const re = new RegExp(computePattern(), "g");
console.log(calls, re.source, re.flags);
"#;

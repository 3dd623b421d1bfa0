//! Weighted content signatures used by content-based classification.
//!
//! Each [`LanguageSignature`] is a bundle of `(pattern, weight)` pairs. A
//! pattern contributes its weight once if it matches anywhere in the text.
//! Patterns are deliberately loose so that fragments which would not parse
//! still classify.
//!
//! Declaration order matters: ties between languages go to the language
//! whose first signature appears earliest in [`SIGNATURES`].

use regex::Regex;
use std::sync::OnceLock;

use super::types::LanguageId;

/// A named, weighted bundle of content patterns for one language variant.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSignature {
    pub id: LanguageId,
    /// Variant name, e.g. `"jsx"` for the JSX flavour of JavaScript
    pub name: &'static str,
    pub patterns: &'static [(&'static str, u32)],
}

pub const SIGNATURES: &[LanguageSignature] = &[
    LanguageSignature {
        id: LanguageId::Python,
        name: "python",
        patterns: &[
            (r"(?m)^\s*def\s+\w+\s*\(.*\)\s*(?:->\s*[^:]+)?:\s*$", 3),
            (
                r"(?m)^\s*(?:from\s+[\w.]+\s+import\s+[\w., ]+|import\s+[\w.]+(?:\s+as\s+\w+)?)\s*$",
                1,
            ),
            (
                r"(?m)^\s*(?:if|elif|while|for|with|try|except|else|class)\b[^{};]*:\s*$",
                1,
            ),
            (r"\bself\.\w+", 1),
            (r"(?m)^\s*elif\b", 2),
            (r"\b(?:None|True|False)\b", 1),
            (r"(?m)^\s*print\(", 1),
            (r#"__name__\s*==\s*['"]__main__['"]"#, 3),
            (r"\blambda\b[^:\n]*:", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::JavaScript,
        name: "javascript",
        patterns: &[
            (r"\b(?:const|let)\s+\w+\s*=", 1),
            (r"\bfunction\s*\w*\s*\([^)]*\)\s*\{", 1),
            (r"=>", 1),
            (r"\bconsole\.(?:log|error|warn|info|debug)\(", 2),
            (r#"\brequire\(\s*['"]"#, 2),
            (r#"(?m)^\s*import\s+.+\s+from\s+['"]"#, 1),
            (r"\b(?:document|window)\.\w+", 1),
            (
                r"(?m)^\s*export\s+(?:default\s+)?(?:function|class|const|let)\b",
                1,
            ),
            (r"\bmodule\.exports\b", 2),
            (r"===|!==", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::JavaScript,
        name: "jsx",
        patterns: &[
            (r"<[A-Z]\w*(?:\s[^<>]*)?/?>", 1),
            (r"\bclassName=", 2),
            (r"\breturn\s*\(\s*<", 2),
            (r"\buse(?:State|Effect|Ref|Memo|Callback)\(", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::TypeScript,
        name: "typescript",
        patterns: &[
            (r"(?m)^\s*(?:export\s+)?interface\s+\w+", 2),
            (r"(?m)^\s*(?:export\s+)?type\s+\w+(?:<[^>]*>)?\s*=", 2),
            (
                r"[\w)]\??:\s*(?:string|number|boolean|any|void|unknown|never)\b",
                2,
            ),
            (r"\b(?:public|private|protected|readonly)\s+\w+\s*[:(]", 1),
            (r"\bas\s+(?:const|string|number|any|unknown)\b", 1),
            (r"(?m)^\s*(?:export\s+)?enum\s+\w+\s*\{", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::TypeScript,
        name: "tsx",
        patterns: &[
            (r"\bReact\.(?:FC|FunctionComponent|ReactNode)\b", 2),
            (r"<[A-Z]\w*(?:\s[^<>]*)?/?>", 1),
            (r"\binterface\s+\w*Props\b", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Java,
        name: "java",
        patterns: &[
            (r"(?m)^\s*package\s+[\w.]+;", 2),
            (r"(?m)^\s*import\s+(?:static\s+)?[\w.]+(?:\.\*)?;", 2),
            (
                r"\bpublic\s+(?:(?:static|final|abstract)\s+)*(?:class|interface|enum)\s+\w+",
                2,
            ),
            (r"\bSystem\.out\.print(?:ln|f)?\(", 3),
            (r"\bpublic\s+static\s+void\s+main\s*\(\s*String", 3),
            (r"@Override\b", 2),
            (r"\bnew\s+[A-Z]\w*(?:<[^>]*>)?\(", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::CSharp,
        name: "csharp",
        patterns: &[
            (r"(?m)^\s*using\s+System(?:\.\w+)*;", 3),
            (r"(?m)^\s*namespace\s+[\w.]+\s*(?:\{|;)?\s*$", 1),
            (r"\bConsole\.Write(?:Line)?\(", 3),
            (r"\{\s*get;(?:\s*(?:private\s+)?set;)?\s*\}", 3),
            (r"\bvar\s+\w+\s*=\s*new\b", 1),
            (
                r"\b(?:public|private|internal)\s+(?:static\s+)?(?:async\s+)?(?:void|string|int|bool|Task)\s+[A-Z]\w*\s*\(",
                2,
            ),
        ],
    },
    LanguageSignature {
        id: LanguageId::C,
        name: "c",
        patterns: &[
            (r"(?m)^\s*#include\s*<[\w./]+\.h>", 2),
            (r"\bprintf\s*\(", 1),
            (r"\b(?:malloc|calloc|realloc|free)\s*\(", 2),
            (r"(?m)^\s*int\s+main\s*\(", 1),
            (r"\bstruct\s+\w+\s*\{", 1),
            (r"\w->\w", 1),
            (r"\btypedef\s+", 2),
            (r"(?m)^\s*#define\s+\w+", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Cpp,
        name: "cpp",
        patterns: &[
            (
                r"(?m)^\s*#include\s*<(?:iostream|vector|string|map|memory|algorithm|unordered_map)>",
                3,
            ),
            (r"\bstd::\w+", 3),
            (r"\b(?:cout|cerr)\s*<<|\bcin\s*>>", 2),
            (r"\btemplate\s*<", 2),
            (r"(?m)^\s*using\s+namespace\s+\w+;", 2),
            (r"\b(?:nullptr|constexpr|virtual)\b", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Go,
        name: "go",
        patterns: &[
            (r"(?m)^\s*package\s+\w+\s*$", 2),
            (r"(?m)^\s*func\s+(?:\([^)]*\)\s*)?\w+\s*\(", 2),
            (r":=", 2),
            (r"\bfmt\.\w+\(", 3),
            (r#"(?m)^\s*import\s+(?:\(|"[\w/.-]+")"#, 2),
            (r"\berr\s*!=\s*nil\b", 3),
            (r"\bgo\s+func\b|\bchan\s+\w+|\bmake\(\s*(?:\[\]|map|chan)", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Rust,
        name: "rust",
        patterns: &[
            (r"(?m)^\s*(?:pub(?:\([\w:]+\))?\s+)?(?:async\s+)?fn\s+\w+", 3),
            (r"\blet\s+mut\s+\w+", 3),
            (r"(?m)^\s*(?:pub\s+)?use\s+[\w:]+(?:::\{[^}]*\})?;", 2),
            (r"(?m)^\s*impl(?:<[^>]*>)?\s+[\w:<>]+", 2),
            (
                r"\b(?:println|eprintln|format|panic|assert_eq|assert)!\(|\bvec!\[",
                3,
            ),
            (r"&mut\s+\w+|&self\b", 2),
            (r"(?m)^\s*#\[\w+", 2),
            (r"\bSome\(|\bOk\(|\bErr\(", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Ruby,
        name: "ruby",
        patterns: &[
            (
                r"(?m)^\s*def\s+(?:self\.)?\w+[?!]?(?:\s*\([^)]*\))?\s*$",
                2,
            ),
            (r"(?m)^\s*end\s*$", 1),
            (r#"(?m)^\s*require(?:_relative)?\s+['"][\w/.-]+['"]"#, 2),
            (r"\bputs\s", 2),
            (r"\battr_(?:accessor|reader|writer)\b", 3),
            (r"\bdo\s*\|\w+(?:,\s*\w+)*\|", 3),
            (r"(?m)^\s*class\s+\w+(?:\s*<\s*[\w:]+)?\s*$", 1),
            (r"(?m)^\s*module\s+[A-Z]\w*\s*$", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Php,
        name: "php",
        patterns: &[
            (r"<\?php", 5),
            (r"\$[a-z_]\w*\s*=[^=>]", 1),
            (r"\$this->\w+", 3),
            (r"(?m)^\s*namespace\s+[\w\\]+;", 2),
            (r"\bfunction\s+\w+\s*\(\s*\$", 2),
            (r"\becho\s+\$|\becho\s+'", 1),
            (r"->\w+\(", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Swift,
        name: "swift",
        patterns: &[
            (
                r"(?m)^\s*import\s+(?:Foundation|UIKit|SwiftUI|Combine|XCTest)\b",
                4,
            ),
            (
                r"(?m)^\s*(?:(?:public|private|internal|static|override|@\w+)\s+)*func\s+\w+(?:<[^>]*>)?\s*\([^)]*\)\s*(?:throws\s+)?->",
                2,
            ),
            (r"\bguard\s+let\b|\bif\s+let\s+\w+\s*=", 3),
            (r"(?m)\b(?:var|let)\s+\w+\s*:\s*[A-Z]\w*[?!]?\s*(?:=|$)", 1),
            (r"(?m)^\s*(?:protocol|extension)\s+\w+", 2),
            (r"\\\(\w+", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Kotlin,
        name: "kotlin",
        patterns: &[
            (
                r"(?m)^\s*(?:(?:private|public|internal|override|suspend|inline|open)\s+)*fun\s+(?:<[^>]*>\s*)?[\w.]+\s*\(",
                3,
            ),
            (r"\bval\s+\w+\s*(?::\s*[\w<>?]+)?\s*=", 2),
            (r"\bprintln\(", 1),
            (
                r"\bdata\s+class\b|\bcompanion\s+object\b|\bobject\s+\w+\s*\{",
                3,
            ),
            (r"(?m)^\s*package\s+[\w.]+\s*$", 1),
            (r"\bwhen\s*\([^)]*\)\s*\{", 2),
            (r"(?m)^\s*import\s+[\w.]+(?:\.\*)?\s*$", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Html,
        name: "html",
        patterns: &[
            (r"(?i)<!DOCTYPE\s+html", 5),
            (r"(?i)<html\b", 3),
            (
                r"(?i)<(?:head|body|div|span|p|a|ul|ol|li|table|tr|td|script|link|meta|form|input|button|section|nav)\b[^>]*>",
                2,
            ),
            (r"</\w+>", 1),
            (r#"(?i)\s(?:href|src|class|id)=""#, 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Css,
        name: "css",
        patterns: &[
            (r"(?m)^\s*[.#]?[a-zA-Z][\w\-.#:, >+~\[\]=]*\{\s*$", 1),
            (
                r"(?m)^\s*(?:color|background(?:-color)?|margin(?:-\w+)?|padding(?:-\w+)?|font-(?:size|family|weight)|display|border(?:-\w+)?|width|height|position|flex(?:-\w+)?|text-align|z-index)\s*:\s*[^;]+;",
                3,
            ),
            (r"#[0-9a-fA-F]{3}(?:[0-9a-fA-F]{3})?\b", 1),
            (r"\b\d+(?:px|em|rem|vh|vw)\b", 1),
            (
                r#"@media\b|@import\s+(?:url\(|['"])|@keyframes\b|@font-face\b"#,
                2,
            ),
            (r":(?:hover|focus|active|before|after|nth-child)\b", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Scss,
        name: "scss",
        patterns: &[
            (r"\$[\w-]+\s*:", 4),
            (r"@(?:mixin|include|extend|use|each|if)\b", 3),
            (r"&(?::|\.|-|\s*\{)", 3),
            (r"(?m)^\s*[\w-]+\s*:\s*\$[\w-]+", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Less,
        name: "less",
        patterns: &[
            (r"@[\w-]+\s*:\s*[^;]+;", 4),
            (r"(?m)^\s*\.[\w-]+\(.*\)\s*;", 2),
            (r"\)\s*when\s*\(", 3),
            (r"(?m)^\s*[\w-]+\s*:\s*@[\w-]+", 2),
            (r#"~""#, 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Json,
        name: "json",
        patterns: &[
            (r"\A\s*[\{\[]", 1),
            (r#""[^"\n]*"\s*:"#, 2),
            (r#"\A\s*\{\s*""#, 2),
            (r":\s*(?:true|false|null)\s*[,}\n]", 1),
            (r"[\}\]]\s*\z", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Yaml,
        name: "yaml",
        patterns: &[
            (r"(?m)^---\s*$", 2),
            (r"(?m)^[\w-]+:\s*$", 1),
            (r"(?m)^[\w-]+:\s+[^\s{\[]", 1),
            (r#"(?m)^\s*-\s+[\w"']"#, 1),
            (r"(?m)^\s*-\s+[\w-]+:\s", 2),
            (r"(?m)^\s+[\w-]+:\s+[^\s;{]+\s*$", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Xml,
        name: "xml",
        patterns: &[
            (r"<\?xml\s+version=", 5),
            (r"\bxmlns(?::\w+)?=", 3),
            (r"<!\[CDATA\[", 3),
            (r"</[\w:]+>", 1),
            (r"<\w+:\w+[\s>]", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Markdown,
        name: "markdown",
        patterns: &[
            (r"(?m)^#{1,6}\s+\S", 1),
            (r"\[[^\]\n]+\]\([^)\n]+\)", 2),
            (r"(?m)^\s*[-*+]\s+\S", 1),
            (r"(?m)^```", 3),
            (r"\*\*[^*\n]+\*\*", 1),
            (r"(?m)^>\s+\S", 1),
            (r"(?m)^\s*\d+\.\s+\S", 1),
        ],
    },
    LanguageSignature {
        id: LanguageId::Shell,
        name: "shell",
        patterns: &[
            (r"\A#!\s*/(?:usr/)?bin/(?:env\s+)?(?:ba|z|k|da)?sh\b", 5),
            (r"(?m)^\s*(?:if|while|elif)\s+\[\[?\s", 3),
            (r"(?m)^\s*(?:fi|done|esac)\s*$", 3),
            (r"\$\{\w+(?:[:#%/][^}]*)?\}", 1),
            (r#""\$\w+""#, 1),
            (r"(?m)^\s*(?:export\s+)?[A-Z_][A-Z0-9_]*=\S", 1),
            (r"(?m)^\s*echo\s", 1),
            (r"\|\s*(?:grep|awk|sed|xargs|sort|uniq|wc|tr|cut)\b", 2),
            (r";\s*then\b|;\s*do\b", 2),
        ],
    },
    LanguageSignature {
        id: LanguageId::Sql,
        name: "sql",
        patterns: &[
            (r"(?i)\bSELECT\s+[\w*,.\s()]+?\s+FROM\s+\w+", 3),
            (r"(?i)\bINSERT\s+INTO\s+\w+", 4),
            (r"(?i)\bCREATE\s+(?:TABLE|INDEX|VIEW)\b", 4),
            (r"(?i)\bUPDATE\s+\w+\s+SET\b", 3),
            (r"(?i)\bWHERE\s+[\w.]+\s*(?:=|<>|!=|<|>|\bLIKE\b|\bIN\b)", 2),
            (r"(?i)\b(?:INNER|LEFT|RIGHT|FULL)\s+(?:OUTER\s+)?JOIN\b", 3),
        ],
    },
    LanguageSignature {
        id: LanguageId::Lua,
        name: "lua",
        patterns: &[
            (r"(?m)^\s*local\s+\w+(?:\s*,\s*\w+)*\s*=", 3),
            (r"(?m)^\s*local\s+function\s+\w+", 3),
            (r"(?m)^\s*function\s+[\w.:]+\s*\([^)]*\)\s*$", 1),
            (r"(?m)\bthen\s*$", 1),
            (r"~=", 2),
            (r#"\w+\s*\.\.\s*["\w]"#, 1),
            (r"\bnil\b", 1),
            (r"\bipairs\(|\bpairs\(", 3),
        ],
    },
    LanguageSignature {
        id: LanguageId::Toml,
        name: "toml",
        patterns: &[
            (r"(?m)^\[[\w.-]+\]\s*$", 2),
            (r"(?m)^\[\[[\w.-]+\]\]\s*$", 3),
            (
                r#"(?m)^[\w-]+\s*=\s*(?:"[^"]*"|'[^']*'|\d[\w.:-]*|true|false|\[|\{)"#,
                1,
            ),
        ],
    },
];

/// A signature with its patterns compiled.
#[derive(Debug)]
pub(crate) struct CompiledSignature {
    pub id: LanguageId,
    pub patterns: Vec<(Regex, u32)>,
}

static COMPILED: OnceLock<Vec<CompiledSignature>> = OnceLock::new();

/// Compiled form of [`SIGNATURES`], built once per process.
///
/// A pattern that fails to compile is dropped with a warning rather than
/// failing the request that triggered compilation.
pub(crate) fn compiled_signatures() -> &'static [CompiledSignature] {
    COMPILED.get_or_init(|| {
        SIGNATURES
            .iter()
            .map(|sig| CompiledSignature {
                id: sig.id,
                patterns: sig
                    .patterns
                    .iter()
                    .filter_map(|&(pattern, weight)| match Regex::new(pattern) {
                        Ok(re) => Some((re, weight)),
                        Err(e) => {
                            tracing::warn!(
                                signature = sig.name,
                                pattern,
                                error = %e,
                                "skipping signature pattern that failed to compile"
                            );
                            None
                        }
                    })
                    .collect(),
            })
            .collect()
    })
}

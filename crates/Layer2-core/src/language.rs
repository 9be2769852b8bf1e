//! Language detection - 파일 확장자 → 언어 ID

use std::path::Path;

/// 파일 경로에서 언어 ID 감지 (확장자 대소문자 무시)
pub fn detect_language(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;

    let language = match extension.to_ascii_lowercase().as_str() {
        "rs" => "rust",

        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",

        "py" | "pyw" | "pyi" => "python",

        "go" => "go",

        "java" => "java",

        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",

        "cs" => "csharp",

        "rb" | "rake" | "gemspec" => "ruby",

        "php" => "php",

        "swift" => "swift",

        "kt" | "kts" => "kotlin",

        "zig" => "zig",

        _ => return None,
    };

    Some(language)
}

//! Report vocabulary: category markers and placeholder bodies.
//!
//! The report itself is verbatim model output; this module only supplies
//! the per-language lookup tables a front end needs to color-code report
//! lines and the body substituted when the model returns nothing.

use kaizen_core::Language;

/// TPS motion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Category {
    /// Directly changes product shape or quality
    ValueAdded,
    /// Necessary but adds no value (reaching, holding, checking)
    Incidental,
    /// Unnecessary motion, waiting, or searching
    Waste,
}

/// Literal substrings that mark a report line as belonging to a category.
pub fn markers(language: Language, category: Category) -> &'static [&'static str] {
    match (language, category) {
        (Language::En, Category::ValueAdded) => &["🟢", "Value Added"],
        (Language::En, Category::Incidental) => &["🟡", "Incidental"],
        (Language::En, Category::Waste) => &["🔴", "Waste", "Muda"],
        (Language::Ja, Category::ValueAdded) => &["🟢", "正味作業"],
        (Language::Ja, Category::Incidental) => &["🟡", "付随作業"],
        (Language::Ja, Category::Waste) => &["🔴", "ムダ"],
        (Language::Vi, Category::ValueAdded) => &["🟢", "Gia tăng giá trị"],
        (Language::Vi, Category::Incidental) => &["🟡", "Công việc phụ"],
        (Language::Vi, Category::Waste) => &["🔴", "Lãng phí"],
    }
}

/// Classify one report line by its first matching marker.
///
/// Checked in the order ValueAdded, Incidental, Waste; a line with no
/// marker (prose, headers, separators) is unclassified.
pub fn classify_line(language: Language, line: &str) -> Option<Category> {
    [Category::ValueAdded, Category::Incidental, Category::Waste]
        .into_iter()
        .find(|category| {
            markers(language, *category)
                .iter()
                .any(|marker| line.contains(marker))
        })
}

/// The body substituted for a report when the model returns no content.
pub fn placeholder(language: Language) -> &'static str {
    match language {
        Language::En => {
            "No analysis content was returned. Please check your API key or try a shorter video."
        }
        Language::Ja => {
            "分析結果が返されませんでした。APIキーを確認するか、動画を短くして再実行してください。"
        }
        Language::Vi => {
            "Không có nội dung phân tích nào được trả về. Vui lòng kiểm tra khóa API hoặc thử video ngắn hơn."
        }
    }
}

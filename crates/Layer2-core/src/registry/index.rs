//! Language Index - 등록된 서비스들이 선언한 언어 ID의 합집합

use std::collections::HashSet;

/// 언어 ID 인덱스
///
/// 단조 증가합니다. 개별 언어 ID는 제거되지 않으며 삽입 순서를 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct LanguageIndex {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl LanguageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 언어 ID들을 합집합으로 추가 - 새로 추가된 수 반환
    pub fn extend<'a>(&mut self, language_ids: impl IntoIterator<Item = &'a String>) -> usize {
        let mut added = 0;
        for language_id in language_ids {
            if self.lookup.insert(language_id.clone()) {
                self.ordered.push(language_id.clone());
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, language_id: &str) -> bool {
        self.lookup.contains(language_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

//! markcheck-nice — Static Nice classification knowledge base.
//! Class records, auxiliary USPTO tables and the keyword matcher.

pub mod classes;
pub mod matcher;
pub mod tables;

use serde::Serialize;

pub use classes::NICE_CLASSES;
pub use markcheck_common::Category;
pub use matcher::{suggest_class_for_keyword, ClassSuggestion};

/// One Nice class: what it covers and the keywords the matcher scores against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NiceClass {
    pub number: i32,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    /// Lowercase lookup terms, strongest signals first.
    pub keywords: &'static [&'static str],
}

pub const MIN_CLASS: i32 = 1;
pub const MAX_CLASS: i32 = 45;

/// Full record for a class number, or `None` outside 1–45.
pub fn get_class_info(class_number: i32) -> Option<&'static NiceClass> {
    if !is_valid_class(class_number) {
        return None;
    }
    NICE_CLASSES.get((class_number - 1) as usize)
}

pub fn is_valid_class(class_number: i32) -> bool {
    (MIN_CLASS..=MAX_CLASS).contains(&class_number)
}

pub fn get_valid_classes() -> std::ops::RangeInclusive<i32> {
    MIN_CLASS..=MAX_CLASS
}

/// Keyword list for a class; empty for unknown classes.
pub fn get_keywords_for_class(class_number: i32) -> &'static [&'static str] {
    get_class_info(class_number).map(|c| c.keywords).unwrap_or(&[])
}

/// Title for a class, or `""` when unknown.
pub fn class_title(class_number: i32) -> &'static str {
    get_class_info(class_number).map(|c| c.title).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_and_complete() {
        assert_eq!(NICE_CLASSES.len(), 45);
        for (i, class) in NICE_CLASSES.iter().enumerate() {
            assert_eq!(class.number, i as i32 + 1);
            assert!(!class.keywords.is_empty(), "class {} has no keywords", class.number);
        }
    }

    #[test]
    fn test_goods_and_services_split_at_class_35() {
        assert!(NICE_CLASSES.iter().take(34).all(|c| c.category == Category::Goods));
        assert!(NICE_CLASSES.iter().skip(34).all(|c| c.category == Category::Services));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for class in NICE_CLASSES.iter() {
            for kw in class.keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_lookup_out_of_range_is_none() {
        assert!(get_class_info(0).is_none());
        assert!(get_class_info(46).is_none());
        assert!(get_class_info(-3).is_none());
        assert_eq!(get_class_info(9).map(|c| c.number), Some(9));
        assert!(get_keywords_for_class(99).is_empty());
        assert_eq!(class_title(99), "");
    }
}

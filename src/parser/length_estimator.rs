use unicode_segmentation::UnicodeSegmentation;
use crate::models::Conf;
use crate::utils::LINES_PER_PAGE;

/// 行数，空字符串为 0 行
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// 单词数
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

/// 页数与场景长度估算
#[derive(Debug, Clone, Copy)]
pub struct LengthEstimator {
    lines_per_page: usize,
}

impl Default for LengthEstimator {
    fn default() -> Self {
        Self::new(LINES_PER_PAGE)
    }
}

impl LengthEstimator {
    /// `lines_per_page` 为 0 时按 1 处理
    pub fn new(lines_per_page: usize) -> Self {
        LengthEstimator {
            lines_per_page: lines_per_page.max(1),
        }
    }

    pub fn from_conf(config: &Conf) -> Self {
        Self::new(config.lines_per_page)
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// 页数，至少为 1
    pub fn page_count(&self, document: &str) -> usize {
        line_count(document).div_ceil(self.lines_per_page).max(1)
    }

    /// 场景长度，以八分之一页计
    pub fn eighths(&self, scene_content: &str) -> usize {
        let lines = line_count(scene_content) as f64;
        (lines / self.lines_per_page as f64 * 8.0).round() as usize
    }

    /// 场景长度标签：`""`、`"3/8 pages"`、`"1 page"`、`"2 pages"`、`"1 3/8 pages"`
    pub fn scene_length(&self, scene_content: &str) -> String {
        let eighths = self.eighths(scene_content);
        match eighths {
            0 => String::new(),
            1..=7 => format!("{}/8 pages", eighths),
            _ => {
                let pages = eighths / 8;
                let rest = eighths % 8;
                if rest == 0 {
                    if pages > 1 {
                        format!("{} pages", pages)
                    } else {
                        format!("{} page", pages)
                    }
                } else {
                    format!("{} {}/8 pages", pages, rest)
                }
            }
        }
    }

    /// 一页约等于一分钟银幕时间
    pub fn screen_time_minutes(page_count: usize) -> usize {
        page_count
    }
}

/// 使用默认每页 55 行计算页数
pub fn page_count(document: &str) -> usize {
    LengthEstimator::default().page_count(document)
}

/// 使用默认每页 55 行计算场景长度标签
pub fn scene_length(scene_content: &str) -> String {
    LengthEstimator::default().scene_length(scene_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> String {
        vec!["x"; n].join("\n")
    }

    #[test]
    fn page_count_has_floor_of_one() {
        assert_eq!(page_count(""), 1);
        assert_eq!(page_count("one line"), 1);
        assert_eq!(page_count(&lines(55)), 1);
        assert_eq!(page_count(&lines(56)), 2);
        assert_eq!(page_count(&lines(110)), 2);
    }

    #[test]
    fn scene_length_labels() {
        assert_eq!(scene_length(""), "");
        assert_eq!(scene_length(&lines(3)), "");
        assert_eq!(scene_length(&lines(4)), "1/8 pages");
        assert_eq!(scene_length(&lines(27)), "4/8 pages");
        assert_eq!(scene_length(&lines(55)), "1 page");
        assert_eq!(scene_length(&lines(110)), "2 pages");
        // 75 / 55 * 8 = 10.9 -> 11 = 1 3/8
        assert_eq!(scene_length(&lines(75)), "1 3/8 pages");
    }

    #[test]
    fn custom_lines_per_page() {
        let estimator = LengthEstimator::new(10);
        assert_eq!(estimator.page_count(&lines(25)), 3);
        assert_eq!(estimator.scene_length(&lines(10)), "1 page");
        assert_eq!(LengthEstimator::new(0).lines_per_page(), 1);
    }

    #[test]
    fn words_are_counted_by_unicode_rules() {
        assert_eq!(word_count("  JOHN enters.\n\nHe sits. "), 4);
        assert_eq!(word_count(""), 0);
    }
}

use serde::Serialize;
use crate::models::{ClassifiedLine, Conf, LineType};
use crate::parser::LengthEstimator;

/// 打印行，供外部 PDF 渲染使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintLine {
    /// 行类型
    pub line_type: LineType,
    /// 行文本（制表符已展开）
    pub text: String,
    /// 全局索引
    pub index: usize,
    /// 所在页码，从 1 开始
    pub page: usize,
}

/// 行处理器
pub struct Liner {
    /// 每页行数
    pub lines_per_page: usize,
    /// 是否合并连续空行
    pub merge_empty_lines: bool,
}

impl Liner {
    /// 创建新的行处理器
    pub fn new(config: &Conf) -> Self {
        Self {
            lines_per_page: LengthEstimator::from_conf(config).lines_per_page(),
            merge_empty_lines: config.merge_empty_lines,
        }
    }

    /// 处理分类行为打印行
    pub fn line(&self, lines: &[ClassifiedLine]) -> Vec<PrintLine> {
        let mut result: Vec<PrintLine> = Vec::new();
        let mut last_line_blank = false;

        for line in lines {
            let curr_blank = line.is_type(&[LineType::Empty]);
            if self.merge_empty_lines && curr_blank && last_line_blank {
                continue;
            }
            last_line_blank = curr_blank;

            let index = result.len();
            result.push(PrintLine {
                line_type: line.line_type,
                // 替换制表符为4个空格
                text: line.text.replace('\t', "    "),
                index,
                page: index / self.lines_per_page + 1,
            });
        }

        result
    }

    /// 总页数
    pub fn page_total(&self, lines: &[PrintLine]) -> usize {
        lines.last().map_or(1, |l| l.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_script;

    #[test]
    fn merges_blank_runs_and_expands_tabs() {
        let liner = Liner::new(&Conf::default());
        let lines = liner.line(&parse_script("\tA.\n\n\n\nB."));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["    A.", "", "B."]);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn paginates_by_lines_per_page() {
        let mut conf = Conf::default();
        conf.lines_per_page = 2;
        conf.merge_empty_lines = false;
        let liner = Liner::new(&conf);
        let lines = liner.line(&parse_script("a.\nb.\nc.\n\nd."));
        let pages: Vec<usize> = lines.iter().map(|l| l.page).collect();
        assert_eq!(pages, vec![1, 1, 2, 2, 3]);
        assert_eq!(liner.page_total(&lines), 3);
        assert_eq!(liner.page_total(&[]), 1);
    }

    #[test]
    fn zero_lines_per_page_is_clamped() {
        let mut conf = Conf::default();
        conf.lines_per_page = 0;
        let liner = Liner::new(&conf);
        assert_eq!(liner.lines_per_page, 1);
        let pages: Vec<usize> = liner.line(&parse_script("a.
b.")).iter().map(|l| l.page).collect();
        assert_eq!(pages, vec![1, 2]);
    }
}

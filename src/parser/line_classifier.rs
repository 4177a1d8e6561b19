use tracing::trace;
use crate::models::LineType;
use crate::utils::screenplay_constants::{TRANSITION_MAX_WORDS, TRANSITION_PHRASES};
use crate::utils::{is_all_uppercase, is_scene_heading};

/// 单行分类器
///
/// 只看当前行、下一行的原始文本以及上一行已经确定的类型，
/// 不会向前读取尚未确定的类型。规则按顺序匹配，先命中者生效。
pub struct LineClassifier;

impl LineClassifier {
    /// 判断 `lines[index]` 的类型
    ///
    /// * `lines` - 文档的全部物理行
    /// * `index` - 当前行号
    /// * `previous` - 上一行已确定的类型（第一行为 None）
    pub fn classify(lines: &[&str], index: usize, previous: Option<LineType>) -> LineType {
        let t = lines.get(index).map(|l| l.trim()).unwrap_or("");
        let next = lines.get(index + 1).map(|l| l.trim());
        let line_type = Self::classify_trimmed(t, next, previous);
        trace!(index, ?line_type, "classified line");
        line_type
    }

    fn classify_trimmed(t: &str, next: Option<&str>, previous: Option<LineType>) -> LineType {
        if t.is_empty() {
            return LineType::Empty;
        }

        let t_upper = t.to_uppercase();

        if is_scene_heading(&t_upper) {
            return LineType::Scene;
        }

        if t.starts_with('(') && t.ends_with(')') {
            return LineType::Parenthetical;
        }

        if Self::is_transition(&t_upper) {
            return LineType::Transition;
        }

        if Self::is_character_cue(t, next) {
            return LineType::Character;
        }

        // 紧跟在角色名或括号提示之后的行视为对白
        match previous {
            Some(LineType::Character) | Some(LineType::Parenthetical) => LineType::Dialogue,
            _ => LineType::Action,
        }
    }

    // 转场：固定短语开头，或冒号结尾且不足 4 个单词
    fn is_transition(t_upper: &str) -> bool {
        if TRANSITION_PHRASES.iter().any(|p| t_upper.starts_with(p)) {
            return true;
        }
        t_upper.ends_with(':') && t_upper.split_whitespace().count() < TRANSITION_MAX_WORDS
    }

    // 角色名：全大写、无连续两个空格，且下一行像对白（括号开头或非全大写），
    // 下一行也不能是场景标题
    fn is_character_cue(t: &str, next: Option<&str>) -> bool {
        if !is_all_uppercase(t) || t.contains("  ") {
            return false;
        }
        match next {
            Some(n) if !n.is_empty() => {
                (n.starts_with('(') || !is_all_uppercase(n)) && !is_scene_heading(n)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_at(lines: &[&str], index: usize, previous: Option<LineType>) -> LineType {
        LineClassifier::classify(lines, index, previous)
    }

    #[test]
    fn blank_and_whitespace_lines_are_empty() {
        assert_eq!(classify_at(&["", "x"], 0, None), LineType::Empty);
        assert_eq!(classify_at(&["   \t"], 0, None), LineType::Empty);
    }

    #[test]
    fn scene_heading_is_case_insensitive() {
        assert_eq!(classify_at(&["int. kitchen - day"], 0, None), LineType::Scene);
        assert_eq!(classify_at(&["  EXT. PARK - NIGHT"], 0, None), LineType::Scene);
    }

    #[test]
    fn parenthetical_needs_both_parens() {
        assert_eq!(classify_at(&["(smiling)"], 0, None), LineType::Parenthetical);
        assert_eq!(
            classify_at(&["JOHN", "(smiling)."], 1, Some(LineType::Character)),
            LineType::Dialogue
        );
        assert_eq!(classify_at(&["(smiling)."], 0, None), LineType::Action);
    }

    #[test]
    fn transition_phrases_and_short_colon_lines() {
        assert_eq!(classify_at(&["CUT TO:"], 0, None), LineType::Transition);
        assert_eq!(classify_at(&["FADE IN"], 0, None), LineType::Transition);
        assert_eq!(classify_at(&["fade to black."], 0, None), LineType::Transition);
        assert_eq!(classify_at(&["SMASH CUT:"], 0, None), LineType::Transition);
    }

    #[test]
    fn long_colon_line_is_not_a_transition() {
        let lines = ["A VERY LONG SENTENCE HAS MANY WORDS HERE INDEED YES:", ""];
        assert_eq!(classify_at(&lines, 0, None), LineType::Action);
        let four = ["THEN IT ENDS HERE:"];
        assert_eq!(classify_at(&four, 0, None), LineType::Action);
    }

    #[test]
    fn character_needs_plausible_dialogue_after_it() {
        let lines = ["JOHN", "Hello there."];
        assert_eq!(classify_at(&lines, 0, None), LineType::Character);

        let lines = ["JOHN", "(quietly)"];
        assert_eq!(classify_at(&lines, 0, None), LineType::Character);

        // 下一行仍是全大写
        let lines = ["BOOM", "CRASH"];
        assert_eq!(classify_at(&lines, 0, None), LineType::Action);

        // 下一行为空或不存在
        assert_eq!(classify_at(&["JOHN", ""], 0, None), LineType::Action);
        assert_eq!(classify_at(&["JOHN"], 0, None), LineType::Action);
    }

    #[test]
    fn character_rejects_double_space_and_heading_after() {
        let lines = ["JOHN  SMITH", "Hi."];
        assert_eq!(classify_at(&lines, 0, None), LineType::Action);

        let lines = ["JOHN", "int. house - day"];
        assert_eq!(classify_at(&lines, 0, None), LineType::Action);
    }

    #[test]
    fn dialogue_only_follows_cue_or_parenthetical() {
        let lines = ["Hello.", "Again."];
        assert_eq!(classify_at(&lines, 0, Some(LineType::Character)), LineType::Dialogue);
        assert_eq!(classify_at(&lines, 0, Some(LineType::Parenthetical)), LineType::Dialogue);
        assert_eq!(classify_at(&lines, 1, Some(LineType::Dialogue)), LineType::Action);
        assert_eq!(classify_at(&lines, 0, Some(LineType::Empty)), LineType::Action);
    }
}

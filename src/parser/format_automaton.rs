use serde::{Deserialize, Serialize};
use tracing::trace;
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::models::{LineType, FORMAT_CYCLE};
use crate::utils::screenplay_constants::CUE_MAX_WORDS;
use crate::utils::{is_all_uppercase, is_scene_heading, strip_character_extension};

/// 当前输入格式
///
/// 编辑器持有这个值，按键时传入 [`transition`] 得到新值。
/// 永远不会是 [`LineType::Empty`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatState(LineType);

impl Default for FormatState {
    /// 每次编辑开始时为 Action
    fn default() -> Self {
        FormatState(LineType::Action)
    }
}

impl FormatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 手动选择格式（菜单、快捷键）
    pub fn select(line_type: LineType) -> ScreenplayResult<Self> {
        if line_type.is_selectable() {
            Ok(FormatState(line_type))
        } else {
            Err(ScreenplayError::NotSelectable(line_type))
        }
    }

    pub fn line_type(&self) -> LineType {
        self.0
    }

    fn cycle_position(&self) -> usize {
        self.0.cycle_index().unwrap_or(0)
    }

    /// Tab：循环到下一个格式
    pub fn cycle_forward(self) -> Self {
        FormatState(FORMAT_CYCLE[(self.cycle_position() + 1) % FORMAT_CYCLE.len()])
    }

    /// Shift+Tab：循环到上一个格式
    pub fn cycle_backward(self) -> Self {
        let len = FORMAT_CYCLE.len();
        FormatState(FORMAT_CYCLE[(self.cycle_position() + len - 1) % len])
    }

    /// 回车提交一行后预测下一行的格式
    ///
    /// * `current_line` - 刚完成的一行
    pub fn commit(self, current_line: &str) -> Self {
        let line = current_line.trim();
        let state = self.0;

        let next = if line.is_empty() || is_scene_heading(line) {
            LineType::Action
        } else if state == LineType::Transition || (line.ends_with(':') && is_all_uppercase(line)) {
            LineType::Scene
        } else {
            match state {
                LineType::Character => LineType::Dialogue,
                LineType::Dialogue | LineType::Parenthetical => LineType::Character,
                LineType::Action if looks_like_cue(line) => LineType::Dialogue,
                _ => LineType::Action,
            }
        };

        trace!(from = %state, to = %next, "format commit");
        FormatState(next)
    }
}

// 刚输入的 Action 行是否其实是角色名
fn looks_like_cue(line: &str) -> bool {
    let name = strip_character_extension(line);
    !name.is_empty()
        && is_all_uppercase(&name)
        && name.split_whitespace().count() <= CUE_MAX_WORDS
        && !name.ends_with(':')
}

/// 输入事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEvent {
    /// 回车；按住 Shift 为软换行，不改变格式
    Enter { shift: bool },
    /// Tab / Shift+Tab
    Tab { shift: bool },
    /// Ctrl+1 到 Ctrl+6
    Shortcut(u8),
    /// 菜单选择
    Select(LineType),
}

/// 状态转移函数
///
/// * `state` - 当前格式
/// * `event` - 按键事件
/// * `current_line` - 光标所在行的文本（仅回车时使用）
pub fn transition(state: FormatState, event: FormatEvent, current_line: &str) -> FormatState {
    match event {
        FormatEvent::Enter { shift: true } => state,
        FormatEvent::Enter { shift: false } => state.commit(current_line),
        FormatEvent::Tab { shift: false } => state.cycle_forward(),
        FormatEvent::Tab { shift: true } => state.cycle_backward(),
        FormatEvent::Shortcut(n) => match (n as usize).checked_sub(1).and_then(|i| FORMAT_CYCLE.get(i)) {
            Some(line_type) => FormatState(*line_type),
            None => state,
        },
        FormatEvent::Select(line_type) => FormatState::select(line_type).unwrap_or(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineType::*;

    fn state(line_type: LineType) -> FormatState {
        FormatState::select(line_type).unwrap()
    }

    fn enter(from: LineType, line: &str) -> LineType {
        transition(state(from), FormatEvent::Enter { shift: false }, line).line_type()
    }

    #[test]
    fn starts_in_action() {
        assert_eq!(FormatState::new().line_type(), Action);
    }

    #[test]
    fn blank_or_heading_goes_to_action() {
        assert_eq!(enter(Dialogue, "   "), Action);
        assert_eq!(enter(Scene, "INT. HOUSE - DAY"), Action);
        assert_eq!(enter(Transition, "ext. park"), Action);
    }

    #[test]
    fn transition_leads_to_scene() {
        assert_eq!(enter(Transition, "cut to black"), Scene);
        assert_eq!(enter(Action, "CUT TO:"), Scene);
    }

    #[test]
    fn dialogue_flow() {
        assert_eq!(enter(Character, "JANE"), Dialogue);
        assert_eq!(enter(Dialogue, "Hello."), Character);
        assert_eq!(enter(Parenthetical, "(beat)"), Character);
    }

    #[test]
    fn action_that_looks_like_a_cue() {
        assert_eq!(enter(Action, "JOHN"), Dialogue);
        assert_eq!(enter(Action, "JOHN (V.O.)"), Dialogue);
        assert_eq!(enter(Action, "THE CROWD GOES WILD AND ROARS"), Action);
        assert_eq!(enter(Action, "John walks in."), Action);
        assert_eq!(enter(Action, "(O.S.)"), Action);
        assert_eq!(enter(Scene, "JOHN"), Action);
    }

    #[test]
    fn shift_enter_keeps_state() {
        let s = transition(state(Dialogue), FormatEvent::Enter { shift: true }, "Hello.");
        assert_eq!(s.line_type(), Dialogue);
    }

    #[test]
    fn tab_cycles_both_ways() {
        let s = transition(state(Transition), FormatEvent::Tab { shift: false }, "");
        assert_eq!(s.line_type(), Scene);
        let s = transition(s, FormatEvent::Tab { shift: true }, "");
        assert_eq!(s.line_type(), Transition);
        let s = transition(state(Action), FormatEvent::Tab { shift: false }, "");
        assert_eq!(s.line_type(), Character);
    }

    #[test]
    fn shortcuts_and_selection() {
        let s = transition(FormatState::new(), FormatEvent::Shortcut(1), "");
        assert_eq!(s.line_type(), Scene);
        let s = transition(s, FormatEvent::Shortcut(6), "");
        assert_eq!(s.line_type(), Transition);
        let s = transition(s, FormatEvent::Shortcut(9), "");
        assert_eq!(s.line_type(), Transition);
        let s = transition(s, FormatEvent::Shortcut(0), "");
        assert_eq!(s.line_type(), Transition);
        let s = transition(s, FormatEvent::Select(Empty), "");
        assert_eq!(s.line_type(), Transition);
        assert!(matches!(FormatState::select(Empty), Err(ScreenplayError::NotSelectable(Empty))));
    }
}

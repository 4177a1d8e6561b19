use crate::utils::{
    is_all_uppercase, is_scene_heading, location_of_heading, split_lines,
    strip_character_extension, OrderedSet,
};

/// 文档级实体提取：场景、角色、地点
///
/// 结果均按首次出现顺序去重。
pub struct EntityExtractor;

impl EntityExtractor {
    /// 所有场景标题（已修剪）
    pub fn scenes(document: &str) -> Vec<String> {
        split_lines(document)
            .into_iter()
            .map(str::trim)
            .filter(|t| is_scene_heading(t))
            .collect::<OrderedSet>()
            .into_vec()
    }

    /// 所有角色名
    ///
    /// 某行之后（跳过空行）的下一行以 `(` 开头或不是全大写，
    /// 且该行去掉扩展后非空、全大写、不是场景标题、不以 `:` 结尾，
    /// 则记录该行（保留扩展部分，如 `JOHN (V.O.)`）。
    pub fn characters(document: &str) -> Vec<String> {
        let lines: Vec<&str> = split_lines(document).into_iter().map(str::trim).collect();

        // 从后往前记录每行之后第一个非空行
        let mut next_nonblank: Vec<Option<&str>> = vec![None; lines.len()];
        let mut upcoming: Option<&str> = None;
        for (i, t) in lines.iter().enumerate().rev() {
            next_nonblank[i] = upcoming;
            if !t.is_empty() {
                upcoming = Some(t);
            }
        }

        let mut characters = OrderedSet::new();
        for (i, t) in lines.iter().enumerate() {
            if t.is_empty() {
                continue;
            }
            let Some(next) = next_nonblank[i] else {
                continue;
            };
            if !(next.starts_with('(') || !is_all_uppercase(next)) {
                continue;
            }
            let name = strip_character_extension(t);
            if !name.is_empty()
                && is_all_uppercase(&name)
                && !is_scene_heading(&name)
                && !name.ends_with(':')
            {
                characters.insert(*t);
            }
        }
        characters.into_vec()
    }

    /// 所有地点：场景标题去掉 INT./EXT. 后 " - " 之前的部分
    pub fn locations(document: &str) -> Vec<String> {
        Self::scenes(document)
            .iter()
            .map(|heading| location_of_heading(heading))
            .filter(|location| !location.is_empty())
            .collect::<OrderedSet>()
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "INT. COFFEE SHOP - DAY

Sunlight streams through the window.

JANE
Thought you could use a refill.

JOHN
(Without looking up)
Thanks. I'm stuck on this scene.

JANE
(Smiling)
Writer's block?

EXT. PARK - NIGHT

A lone figure sits on a bench.

INT. COFFEE SHOP - DAY

JOHN (V.O.)
Later.
";

    #[test]
    fn scenes_are_unique_in_order() {
        assert_eq!(
            EntityExtractor::scenes(SCRIPT),
            vec!["INT. COFFEE SHOP - DAY", "EXT. PARK - NIGHT"]
        );
    }

    #[test]
    fn characters_keep_extension() {
        assert_eq!(
            EntityExtractor::characters(SCRIPT),
            vec!["JANE", "JOHN", "JOHN (V.O.)"]
        );
    }

    #[test]
    fn characters_look_past_blank_lines() {
        assert_eq!(EntityExtractor::characters("BOB\n\n\nHey."), vec!["BOB"]);
        assert!(EntityExtractor::characters("BOB\n\n").is_empty());
    }

    #[test]
    fn colon_lines_and_headings_are_not_characters() {
        assert!(EntityExtractor::characters("CUT TO:\nShe runs.").is_empty());
        assert!(EntityExtractor::characters("INT. HALL\nQuiet.").is_empty());
        assert!(EntityExtractor::characters("(O.S.)\nQuiet.").is_empty());
    }

    #[test]
    fn locations_are_deduplicated() {
        assert_eq!(
            EntityExtractor::locations(SCRIPT),
            vec!["COFFEE SHOP", "PARK"]
        );
        assert_eq!(
            EntityExtractor::locations("INT. PARK - DAY\nEXT. PARK - NIGHT\nINT.\n"),
            vec!["PARK"]
        );
    }

    #[test]
    fn unstructured_text_yields_nothing() {
        assert!(EntityExtractor::scenes("just some prose").is_empty());
        assert!(EntityExtractor::characters("").is_empty());
        assert!(EntityExtractor::locations("").is_empty());
    }
}

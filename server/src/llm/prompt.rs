//! The storyboard system instruction.
//!
//! Describes the document layout both variants follow. The shot-table header
//! and the version separator are spelled with the same constants the
//! extractor and the splitter read, so a compliant reply always parses.

use std::fmt::Write;

use storyboard::consts::{SHOT_TABLE_MARKER, VERSION_SPLIT};

const PLANNING_SUBSECTIONS: [&str; 6] =
    ["主题定位", "受众与平台", "核心卖点", "叙事结构", "视觉与声音风格", "关键场景与镜头亮点"];

/// Fixed instruction sent with every live draft.
#[must_use]
pub fn storyboard_instruction() -> String {
    let mut out = String::new();
    out.push_str("你是一名资深视频策划。根据用户的策划需求，输出两个版本的完整视频策划方案：\n");
    out.push_str("方案A为15秒短视频版，方案B为60秒完整版。\n\n");
    out.push_str("每个版本使用 Markdown，并严格按以下顺序包含这些章节：\n");
    out.push_str("# 一页速览\n");
    out.push_str("# 完整策划草案（含六个编号小节）\n");
    for (i, title) in PLANNING_SUBSECTIONS.iter().enumerate() {
        let _ = writeln!(out, "## {} {title}", i + 1);
    }
    out.push_str("# 分镜脚本（镜号表）\n");
    let _ = writeln!(
        out,
        "表头必须为：{SHOT_TABLE_MARKER} 画面/景别/运动 | 声音/台词 | 字幕/图形 | 道具/素材 | 目的 |"
    );
    out.push_str("每一行对应一个镜头，六列均不可留空，表格前后各空一行。\n");
    out.push_str("# 拍摄与后期要点\n");
    out.push_str("# 合规与风险自检\n");
    out.push_str("# 待确认项\n\n");
    let _ = write!(out, "两个版本之间单独一行输出分隔符 {VERSION_SPLIT}，不要输出任何其他说明文字。");
    out
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

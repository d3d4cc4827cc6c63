//! The two narrative variants of one generation.
//!
//! A model answers with a single blob holding both documents joined by
//! [`VERSION_SPLIT`]. [`GenerationResult::from_blob`] is the only place that
//! separator is interpreted; a blob without it degrades instead of failing.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MALFORMED_VARIANT_PLACEHOLDER, VERSION_SPLIT};

/// Which of the two generated cuts is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// 15-second short-form hook cut.
    #[default]
    A,
    /// 60-second long-form brand story.
    B,
}

impl Variant {
    /// Both variants in tab order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Tab title shown in the sidebar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::A => "版本 A: 15s 引流短片",
            Self::B => "版本 B: 60s 品牌故事",
        }
    }

    /// One-line description under the tab title.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::A => "快节奏 · 强钩子 · 社交媒体",
            Self::B => "完整叙事 · 情感升华 · 官方展示",
        }
    }
}

/// Both markdown documents produced by one generate action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Short-form document.
    pub variant_a: String,
    /// Long-form document.
    pub variant_b: String,
}

impl GenerationResult {
    /// Split a generated blob on the version separator.
    ///
    /// The first two pieces become variant A and B, trimmed; further pieces
    /// are dropped. Without a separator the untouched blob becomes variant A
    /// and variant B carries a fixed notice.
    #[must_use]
    pub fn from_blob(blob: &str) -> Self {
        let mut parts = blob.split(VERSION_SPLIT);
        match (parts.next(), parts.next()) {
            (Some(a), Some(b)) => Self { variant_a: a.trim().to_owned(), variant_b: b.trim().to_owned() },
            _ => Self { variant_a: blob.to_owned(), variant_b: MALFORMED_VARIANT_PLACEHOLDER.to_owned() },
        }
    }

    /// The document for the given tab.
    #[must_use]
    pub fn variant(&self, variant: Variant) -> &str {
        match variant {
            Variant::A => &self.variant_a,
            Variant::B => &self.variant_b,
        }
    }
}

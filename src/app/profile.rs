//! # Profile Summary
//!
//! Turns a [`LedgerSnapshot`] into the text printed by `krishimitra profile`.
//!
//! Streak, badge and achievements are fixed placeholders; only the ledger
//! values change between runs.

use crate::ledger::LedgerSnapshot;
use std::fmt;

/// Badge shown until badges are earned
pub const BEGINNER_BADGE: &str = "Beginner 🌱";

/// An achievement slot on the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trophy {
    pub name: &'static str,
    pub emoji: &'static str,
    pub unlocked: bool,
}

const TROPHIES: [(&str, &str); 5] = [
    ("First Crop", "🏅"),
    ("First Disease", "🏆"),
    ("10 Crops", "🥉"),
    ("50 Crops", "🥈"),
    ("100 Crops", "🥇"),
];

/// Everything the profile command displays
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub farmer_name: String,
    pub snapshot: LedgerSnapshot,
    pub streak_days: u32,
    pub badge: &'static str,
    pub trophies: Vec<Trophy>,
}

impl ProfileSummary {
    pub fn from_snapshot(farmer_name: &str, snapshot: LedgerSnapshot) -> Self {
        let trophies = TROPHIES
            .iter()
            .map(|&(name, emoji)| Trophy {
                name,
                emoji,
                unlocked: false,
            })
            .collect();

        Self {
            farmer_name: farmer_name.to_string(),
            snapshot,
            streak_days: 0,
            badge: BEGINNER_BADGE,
            trophies,
        }
    }

    /// Render as plain text, one card per block.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;

        writeln!(f, "👨‍🌾 {}", self.farmer_name)?;
        writeln!(f, "Your Farmer Profile")?;
        writeln!(f)?;
        writeln!(f, "🔥 Total Streak: {} day(s)", self.streak_days)?;
        writeln!(f)?;
        writeln!(f, "🌾 Favorite Crop")?;
        writeln!(
            f,
            "   {} ({} times)",
            s.favorite_crop_name, s.favorite_crop_count
        )?;
        writeln!(f)?;
        writeln!(f, "🏅 Badge")?;
        writeln!(f, "   {}", self.badge)?;
        writeln!(f)?;
        writeln!(f, "📊 Stats")?;
        writeln!(f, "   🌽 Crops Analyzed: {}", s.total_crops)?;
        writeln!(f, "   🦠 Diseases Detected: {}", s.total_diseases)?;
        writeln!(f)?;
        writeln!(f, "🏆 Achievements")?;
        for trophy in &self.trophies {
            let status = if trophy.unlocked { "Unlocked" } else { "Locked" };
            writeln!(f, "   {} {} - {}", trophy.emoji, trophy.name, status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_placeholders() {
        let summary = ProfileSummary::from_snapshot("Kiran", LedgerSnapshot::default());
        assert_eq!(summary.streak_days, 0);
        assert_eq!(summary.badge, BEGINNER_BADGE);
        assert_eq!(summary.trophies.len(), 5);
        assert!(summary.trophies.iter().all(|t| !t.unlocked));
    }

    #[test]
    fn test_render_includes_ledger_values() {
        let snapshot = LedgerSnapshot {
            total_crops: 12,
            total_diseases: 3,
            favorite_crop_name: "maize".to_string(),
            favorite_crop_count: 4,
        };
        let text = ProfileSummary::from_snapshot("Manju", snapshot).render();

        assert!(text.contains("Manju"));
        assert!(text.contains("maize (4 times)"));
        assert!(text.contains("Crops Analyzed: 12"));
        assert!(text.contains("Diseases Detected: 3"));
        assert!(text.contains("100 Crops - Locked"));
    }
    #[test]
    fn test_render_layout() {
        let text = ProfileSummary::from_snapshot("Asha", LedgerSnapshot::default()).render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "👨‍🌾 Asha");
        assert_eq!(lines[6], "   Rice (0 times)");
        assert_eq!(lines.last(), Some(&"   🥇 100 Crops - Locked"));
        assert!(text.ends_with('\n'));
    }
}

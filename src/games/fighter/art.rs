//! Sprite art for Type Fighter.
//!
//! The built-in set ships with the binary. A sprite directory can replace it
//! with text-art files laid out as `<dir>/<gender>/<name>_<i>.txt` and
//! `<dir>/monsters/<type>/<name>_<i>.txt`.

use super::types::{FighterState, Gender, MonsterState};
use crate::core::animation::{Frame, SpriteSheet};
use crate::core::palette::{self, Rgb};
use std::path::PathBuf;

/// Where sprite frames come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtSource {
    #[default]
    Builtin,
    Directory(PathBuf),
}

/// Per-state animation parameters: frame duration and file stem/count.
pub struct AnimationSpec {
    pub duration_ms: u64,
    pub stem: &'static str,
    pub frame_count: usize,
}

pub fn fighter_spec(state: FighterState) -> AnimationSpec {
    let (duration_ms, stem, frame_count) = match state {
        FighterState::Idle => (200, "idle", 4),
        FighterState::Walking => (150, "run", 4),
        FighterState::Dead => (120, "death", 4),
        FighterState::Typing => (100, "idle", 2),
        FighterState::Attack => (100, "attack_r", 3),
        FighterState::Jump => (100, "jump", 2),
        FighterState::Hurt => (150, "hurt", 2),
    };
    AnimationSpec {
        duration_ms,
        stem,
        frame_count,
    }
}

pub fn monster_spec(state: MonsterState) -> AnimationSpec {
    let (duration_ms, stem, frame_count) = match state {
        MonsterState::Idle => (200, "idle", 2),
        MonsterState::Hurt => (150, "hurt", 1),
    };
    AnimationSpec {
        duration_ms,
        stem,
        frame_count,
    }
}

// ── Built-in fighter frames ─────────────────────────────────────────

const IDLE: [&str; 4] = [
    " O \n/|\\\n/ \\",
    " O \n/|\\\n| |",
    " O \n\\|/\n/ \\",
    " O \n/|\\\n| |",
];

const RUN: [&str; 4] = [
    " O \n/|-\n/ >",
    " O \n-|\\\n< \\",
    " O \n/|-\n | >",
    " O \n-|\\\n<| ",
];

const DEATH: [&str; 4] = [
    " O \n/|\\\n/ \\",
    " o \n\\|/\n/ \\",
    "   \n o_\n/|\\",
    "   \n   \n_o/_",
];

const ATTACK: [&str; 3] = [" O \n/|=\n/ \\", " O_\n/|==\n/ \\", " O__\n/|===\n/ \\"];

const JUMP: [&str; 2] = ["\\O/\n | \n/ \\", "\\O/\n | \n< >"];

const HURT: [&str; 2] = [" X \n/|\\\n/ \\", " x \n\\|/\n/ \\"];

// ── Built-in monster frames ─────────────────────────────────────────

const MONSTER_IDLE: [&str; 2] = [" /\\ \n(oo)\n/||\\", " /\\ \n(oo)\n\\||/"];

const MONSTER_HURT: [&str; 1] = [" /\\ \n(xx)\n/  \\"];

fn builtin_fighter_frames(state: FighterState) -> &'static [&'static str] {
    match state {
        FighterState::Idle | FighterState::Typing => &IDLE,
        FighterState::Walking => &RUN,
        FighterState::Dead => &DEATH,
        FighterState::Attack => &ATTACK,
        FighterState::Jump => &JUMP,
        FighterState::Hurt => &HURT,
    }
}

fn builtin_monster_frames(state: MonsterState) -> &'static [&'static str] {
    match state {
        MonsterState::Idle => &MONSTER_IDLE,
        MonsterState::Hurt => &MONSTER_HURT,
    }
}

pub fn gender_color(gender: Gender) -> Rgb {
    match gender {
        Gender::Male => Rgb(120, 180, 255),
        Gender::Female => Rgb(255, 140, 200),
    }
}

/// Monster tint from its type name, falling back to red for unknown names.
pub fn monster_color(monster_type: &str) -> Rgb {
    palette::named(monster_type).unwrap_or(palette::RED)
}

/// Build the sheet for one fighter state.
pub fn fighter_sheet(
    source: &ArtSource,
    gender: Gender,
    state: FighterState,
    width: u32,
    height: u32,
) -> SpriteSheet {
    let spec = fighter_spec(state);
    let color = gender_color(gender);
    match source {
        ArtSource::Builtin => {
            let frames = builtin_fighter_frames(state)
                .iter()
                .take(spec.frame_count)
                .map(|art| Frame::from_art(art, color))
                .collect();
            SpriteSheet::from_frames(width, height, frames)
        }
        ArtSource::Directory(dir) => {
            let base = dir.join(gender.dir_name());
            let paths: Vec<PathBuf> = (0..spec.frame_count)
                .map(|i| base.join(format!("{}_{}.txt", spec.stem, i)))
                .collect();
            SpriteSheet::load(width, height, &paths, color)
        }
    }
}

/// Build the sheet for one monster state.
pub fn monster_sheet(
    source: &ArtSource,
    monster_type: &str,
    state: MonsterState,
    width: u32,
    height: u32,
) -> SpriteSheet {
    let spec = monster_spec(state);
    let color = monster_color(monster_type);
    match source {
        ArtSource::Builtin => {
            let frames = builtin_monster_frames(state)
                .iter()
                .take(spec.frame_count)
                .map(|art| Frame::from_art(art, color))
                .collect();
            SpriteSheet::from_frames(width, height, frames)
        }
        ArtSource::Directory(dir) => {
            let base = dir.join("monsters").join(monster_type);
            let paths: Vec<PathBuf> = (0..spec.frame_count)
                .map(|i| base.join(format!("{}_{}.txt", spec.stem, i)))
                .collect();
            SpriteSheet::load(width, height, &paths, color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_frame_counts_match_specs() {
        for state in FighterState::ALL {
            let sheet = fighter_sheet(&ArtSource::Builtin, Gender::Male, state, 80, 120);
            assert_eq!(sheet.len(), fighter_spec(state).frame_count, "{:?}", state);
        }
        for state in [MonsterState::Idle, MonsterState::Hurt] {
            let sheet = monster_sheet(&ArtSource::Builtin, "blue", state, 80, 120);
            assert_eq!(sheet.len(), monster_spec(state).frame_count);
        }
    }

    #[test]
    fn test_directory_source_falls_back_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let male = dir.path().join("male");
        std::fs::create_dir_all(&male).unwrap();
        std::fs::write(male.join("jump_0.txt"), "\\o/\n | ").unwrap();

        let sheet = fighter_sheet(
            &ArtSource::Directory(dir.path().to_path_buf()),
            Gender::Male,
            FighterState::Jump,
            80,
            120,
        );
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.frames[0].rows[0], "\\o/");
        assert_eq!(sheet.frames[1].color, palette::RED);
    }

    #[test]
    fn test_monster_color_unknown_is_red() {
        assert_eq!(monster_color("blue"), palette::BLUE);
        assert_eq!(monster_color("glorp"), palette::RED);
    }
}

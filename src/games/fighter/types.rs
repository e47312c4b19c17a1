//! Type Fighter data structures.
//!
//! The world scrolls past a fighter pinned at a fixed screen column. Monsters
//! sit at fixed world positions; each one carries a quick-time event that
//! fires when the scroll distance reaches it.

use super::art::{self, ArtSource};
use crate::core::animation::{Animation, Frame};
use crate::core::geometry::Rect;
use serde::{Deserialize, Serialize};

/// World dimensions (the fighter's "screen").
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

pub const FIGHTER_WIDTH: u32 = 80;
pub const FIGHTER_HEIGHT: u32 = 120;

/// Ground line the fighter stands on (top of the fighter rect).
pub const FIGHTER_GROUND_Y: f64 = 400.0;

pub const FIGHTER_MAX_HEALTH: u32 = 100;

/// Most recent messages kept for the info panel.
pub const MESSAGE_LOG_LEN: usize = 5;

/// Fighter animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterState {
    Idle,
    Walking,
    Typing,
    Hurt,
    Attack,
    Dead,
    Jump,
}

impl FighterState {
    pub const ALL: [FighterState; 7] = [
        FighterState::Idle,
        FighterState::Walking,
        FighterState::Typing,
        FighterState::Hurt,
        FighterState::Attack,
        FighterState::Dead,
        FighterState::Jump,
    ];

    fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walking => 1,
            Self::Typing => 2,
            Self::Hurt => 3,
            Self::Attack => 4,
            Self::Dead => 5,
            Self::Jump => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walking",
            Self::Typing => "typing",
            Self::Hurt => "hurt",
            Self::Attack => "attack",
            Self::Dead => "dead",
            Self::Jump => "jump",
        }
    }
}

/// What a quick-time event asks the fighter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QteKind {
    Move,
    Attack,
    Jump,
    Dodge,
    Block,
}

impl QteKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Attack => "attack",
            Self::Jump => "jump",
            Self::Dodge => "dodge",
            Self::Block => "block",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterState {
    Idle,
    Hurt,
}

/// Which art set the fighter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterResult {
    Victory,
    Defeat,
}

/// A monster standing at an event's world position.
#[derive(Debug, Clone)]
pub struct QteSprite {
    /// World-space rectangle (x is the unscaled box's left edge plus the
    /// centering offset).
    pub rect: Rect,
    pub scale: f64,
    pub original_width: u32,
    pub original_height: u32,
    pub state: MonsterState,
    pub monster_type: String,
    idle: Animation,
    hurt: Animation,
}

impl QteSprite {
    pub fn new(
        x: f64,
        y: f64,
        width: u32,
        height: u32,
        monster_type: &str,
        scale: f64,
        source: &ArtSource,
    ) -> Self {
        let scaled_width = (width as f64 * scale) as u32;
        let scaled_height = (height as f64 * scale) as u32;

        // Center the scaled sprite inside the unscaled box
        let x_offset = (width.saturating_sub(scaled_width) / 2) as f64;
        let y_offset = (height.saturating_sub(scaled_height) / 2) as f64;

        let make = |state: MonsterState| {
            let spec = art::monster_spec(state);
            Animation::new(
                art::monster_sheet(source, monster_type, state, width, height),
                spec.duration_ms,
            )
        };

        Self {
            rect: Rect::new(
                x + x_offset,
                y + y_offset,
                scaled_width as f64,
                scaled_height as f64,
            ),
            scale,
            original_width: width,
            original_height: height,
            state: MonsterState::Idle,
            monster_type: monster_type.to_string(),
            idle: make(MonsterState::Idle),
            hurt: make(MonsterState::Hurt),
        }
    }

    pub fn set_state(&mut self, new_state: MonsterState) {
        if self.state != new_state {
            self.state = new_state;
            self.animation_mut().reset();
        }
    }

    pub fn animation(&self) -> &Animation {
        match self.state {
            MonsterState::Idle => &self.idle,
            MonsterState::Hurt => &self.hurt,
        }
    }

    fn animation_mut(&mut self) -> &mut Animation {
        match self.state {
            MonsterState::Idle => &mut self.idle,
            MonsterState::Hurt => &mut self.hurt,
        }
    }

    pub fn animate(&mut self, now_ms: u64) {
        self.animation_mut().update(now_ms);
    }

    pub fn frame(&self) -> Frame {
        self.animation().current()
    }
}

/// A quick-time event placed in the world.
#[derive(Debug, Clone)]
pub struct QtEvent {
    /// World x position of the event (and its monster).
    pub position: f64,
    /// Character the player must type.
    pub key: char,
    pub kind: QteKind,
    /// Milliseconds allowed to respond once the prompt appears.
    pub time_limit_ms: u64,
    pub success_message: String,
    pub fail_message: String,
    pub damage_on_fail: u32,
    /// How far ahead of the fighter the prompt fires.
    pub trigger_distance: f64,
    pub sprite: Option<QteSprite>,
}

impl QtEvent {
    pub fn new(position: f64, key: char, kind: QteKind, time_limit_ms: u64) -> Self {
        Self {
            position,
            key,
            kind,
            time_limit_ms,
            success_message: String::new(),
            fail_message: String::new(),
            damage_on_fail: 0,
            trigger_distance: 100.0,
            sprite: None,
        }
    }

    pub fn with_messages(mut self, success: &str, fail: &str) -> Self {
        self.success_message = success.to_string();
        self.fail_message = fail.to_string();
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage_on_fail = damage;
        self
    }

    pub fn with_trigger_distance(mut self, distance: f64) -> Self {
        self.trigger_distance = distance;
        self
    }

    pub fn with_sprite(mut self, sprite: QteSprite) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

/// The fighter pinned at a fixed screen column.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub gender: Gender,
    pub state: FighterState,
    pub rect: Rect,
    /// True while the fighter is running (the world scrolls).
    pub moving: bool,
    /// World units scrolled per physics step.
    pub speed: f64,
    pub facing_right: bool,
    pub initial_y: f64,
    pub y_velocity: f64,
    pub jump_speed: f64,
    pub gravity: f64,
    pub is_jumping: bool,
    pub health: u32,
    animations: Vec<Animation>,
}

impl Fighter {
    pub fn new(x: f64, y: f64, gender: Gender, source: &ArtSource) -> Self {
        let animations = FighterState::ALL
            .iter()
            .map(|&state| {
                let spec = art::fighter_spec(state);
                Animation::new(
                    art::fighter_sheet(source, gender, state, FIGHTER_WIDTH, FIGHTER_HEIGHT),
                    spec.duration_ms,
                )
            })
            .collect();

        Self {
            gender,
            state: FighterState::Idle,
            rect: Rect::new(x, y, FIGHTER_WIDTH as f64, FIGHTER_HEIGHT as f64),
            moving: true,
            speed: 3.0,
            facing_right: true,
            initial_y: y,
            y_velocity: 0.0,
            jump_speed: -18.0,
            gravity: 0.7,
            is_jumping: false,
            health: FIGHTER_MAX_HEALTH,
            animations,
        }
    }

    pub fn animation(&self, state: FighterState) -> &Animation {
        &self.animations[state.index()]
    }

    /// Change state, restarting the new state's animation only on an actual change.
    /// Dead is final.
    pub fn set_state(&mut self, new_state: FighterState) {
        if self.state != new_state && !self.is_dead() {
            self.state = new_state;
            self.animations[new_state.index()].reset();
        }
    }

    /// Start a jump unless one is already in progress.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.is_jumping = true;
            self.y_velocity = self.jump_speed;
            self.set_state(FighterState::Jump);
        }
    }

    pub fn attack(&mut self) {
        self.set_state(FighterState::Attack);
    }

    /// Apply gravity while airborne and land back on the starting row.
    pub fn update_physics(&mut self) {
        if !self.is_jumping {
            return;
        }
        self.y_velocity += self.gravity;
        self.rect.y += self.y_velocity;

        if self.rect.y >= self.initial_y {
            self.rect.y = self.initial_y;
            self.y_velocity = 0.0;
            self.is_jumping = false;
            if self.moving {
                self.set_state(FighterState::Walking);
            } else {
                self.set_state(FighterState::Idle);
            }
        }
    }

    /// Subtract health. Returns true if this blow was fatal.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    pub fn is_dead(&self) -> bool {
        self.state == FighterState::Dead
    }

    pub fn animate(&mut self, now_ms: u64) {
        self.animations[self.state.index()].update(now_ms);
    }

    pub fn frame(&self) -> Frame {
        self.animation(self.state).current()
    }
}

/// A line in the fighter's message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FighterMessage {
    pub text: String,
    pub success: bool,
}

/// Main Type Fighter state.
#[derive(Debug, Clone)]
pub struct TypeFighterGame {
    pub game_result: Option<FighterResult>,
    pub forfeit_pending: bool,
    /// True until the player presses Space. Nothing moves while waiting.
    pub waiting_to_start: bool,

    pub fighter: Fighter,

    // -- World scroll --
    /// Total distance the world has scrolled.
    pub world_offset: f64,
    pub background_x: f64,
    pub background_width: f64,

    // -- Quick-time events --
    pub events: Vec<QtEvent>,
    /// Index of the next event that has not triggered yet.
    pub current_event_index: usize,
    pub waiting_for_input: bool,
    /// Index into `events` of the prompt on screen.
    pub current_event: Option<usize>,
    pub prompt_start_ms: u64,
    /// Most recently resolved event, drawn while its animation plays.
    pub last_resolved: Option<usize>,

    // -- Resolution animation --
    pub animation_timer_ms: u64,
    pub animation_complete: bool,

    // -- Scoring --
    pub successes: u32,
    pub failures: u32,
    pub messages: Vec<FighterMessage>,

    // -- Timing --
    /// Game clock in milliseconds, advanced one physics step at a time.
    pub clock_ms: u64,
    pub accumulated_time_ms: u64,
}

impl TypeFighterGame {
    /// New game with the default event script.
    pub fn new(gender: Gender, source: &ArtSource) -> Self {
        let events = default_events(source);
        Self::with_events(gender, source, events)
    }

    pub fn with_events(gender: Gender, source: &ArtSource, events: Vec<QtEvent>) -> Self {
        let fighter = Fighter::new(
            (SCREEN_WIDTH as u32 / 3) as f64,
            FIGHTER_GROUND_Y,
            gender,
            source,
        );
        Self {
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,
            fighter,
            world_offset: 0.0,
            background_x: 0.0,
            background_width: SCREEN_WIDTH,
            events,
            current_event_index: 0,
            waiting_for_input: false,
            current_event: None,
            prompt_start_ms: 0,
            last_resolved: None,
            animation_timer_ms: 0,
            animation_complete: true,
            successes: 0,
            failures: 0,
            messages: Vec::new(),
            clock_ms: 0,
            accumulated_time_ms: 0,
        }
    }

    /// The event whose prompt is on screen.
    pub fn active_event(&self) -> Option<&QtEvent> {
        self.current_event.and_then(|i| self.events.get(i))
    }

    pub fn push_message(&mut self, text: &str, success: bool) {
        if text.is_empty() {
            return;
        }
        self.messages.push(FighterMessage {
            text: text.to_string(),
            success,
        });
        if self.messages.len() > MESSAGE_LOG_LEN {
            let excess = self.messages.len() - MESSAGE_LOG_LEN;
            self.messages.drain(..excess);
        }
    }

    /// "ATTACK: Press a" for the active prompt.
    pub fn prompt_text(&self) -> Option<String> {
        if !self.waiting_for_input {
            return None;
        }
        self.active_event()
            .map(|e| format!("{}: Press {}", e.kind.name().to_uppercase(), e.key))
    }

    /// Seconds left on the active prompt, floored at zero.
    pub fn time_remaining_secs(&self) -> Option<f64> {
        if !self.waiting_for_input {
            return None;
        }
        let event = self.active_event()?;
        let elapsed = self.clock_ms.saturating_sub(self.prompt_start_ms);
        Some(event.time_limit_ms.saturating_sub(elapsed) as f64 / 1000.0)
    }

    /// Sprites to draw this frame, with their screen x positions.
    pub fn visible_sprites(&self) -> Vec<(&QteSprite, f64)> {
        let mut indices: Vec<usize> = (self.current_event_index..self.events.len()).collect();
        if self.waiting_for_input {
            if let Some(i) = self.current_event {
                indices.push(i);
            }
        }
        if !self.animation_complete {
            if let Some(i) = self.last_resolved {
                indices.push(i);
            }
        }
        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .filter_map(|i| {
                let event = &self.events[i];
                let sprite = event.sprite.as_ref()?;
                let screen_x = sprite.rect.x - self.world_offset;
                let on_screen = -sprite.rect.width <= screen_x && screen_x <= SCREEN_WIDTH;
                on_screen.then_some((sprite, screen_x))
            })
            .collect()
    }

    /// Number of events that have been triggered and resolved.
    pub fn resolved_count(&self) -> u32 {
        self.successes + self.failures
    }
}

/// The built-in three-monster gauntlet.
pub fn default_events(source: &ArtSource) -> Vec<QtEvent> {
    let monster = |x: f64| QteSprite::new(x, FIGHTER_GROUND_Y, 80, 120, "blue", 0.5, source);
    vec![
        QtEvent::new(700.0, 'a', QteKind::Attack, 2000)
            .with_messages("First strike!", "Missed the opening!")
            .with_damage(10)
            .with_trigger_distance(70.0)
            .with_sprite(monster(700.0)),
        QtEvent::new(1400.0, 'j', QteKind::Jump, 1500)
            .with_messages("Aerial maneuver!", "Couldn't get airborne!")
            .with_damage(15)
            .with_trigger_distance(70.0)
            .with_sprite(monster(1400.0)),
        QtEvent::new(2000.0, 'k', QteKind::Attack, 2000)
            .with_messages("Finishing blow!", "Failed to finish!")
            .with_damage(20)
            .with_trigger_distance(70.0)
            .with_sprite(monster(2000.0)),
    ]
}

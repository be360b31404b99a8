//! Scramble-then-reveal text animation.
//!
//! [`RevealText`] is a pure state machine: it never touches a clock. Every
//! operation hands back a [`Directive`] telling the driver which timer to arm
//! or release, and every armed timer carries the [`RunToken`] it was armed
//! under. Starting, cancelling or tearing down a run moves the token forward,
//! so a callback from an older run is reported as [`Directive::Stale`] and
//! leaves the display untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

pub const DEFAULT_POOL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+";
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Glyphs the shuffle headings scramble through.
pub const SHUFFLE_POOL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("character pool needs at least one visible glyph")]
    EmptyPool,
}

/// Glyphs drawn for positions that are not yet revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn new(glyphs: &str) -> Result<Self, RevealError> {
        let glyphs = glyphs
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<Vec<_>>();
        if glyphs.is_empty() {
            return Err(RevealError::EmptyPool);
        }
        Ok(Self(glyphs))
    }

    /// Pool made only of the glyphs already present in `text`.
    pub fn from_text(text: &str) -> Result<Self, RevealError> {
        let mut seen = BTreeSet::new();
        let unique = text
            .chars()
            .filter(|c| seen.insert(*c))
            .collect::<String>();
        Self::new(&unique)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> char {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

impl Default for CharacterPool {
    fn default() -> Self {
        Self(DEFAULT_POOL.chars().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    Start,
    End,
    Center,
}

/// Which glyphs take part in a shuffle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleSelection {
    /// Every other glyph, counted in shuffle order from the first.
    EvenOdd,
    /// Each glyph independently with even odds, redrawn every run.
    Random,
    All,
}

/// Order in which shuffled glyphs settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleOrder {
    /// Left to right.
    Right,
    /// Right to left.
    Left,
}

/// Staggered per-glyph scramble: the glyph at rank `r` in shuffle order
/// settles on tick `settle_ticks + r * stagger_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuffle {
    pub selection: ShuffleSelection,
    pub order: ShuffleOrder,
    pub settle_ticks: u32,
    pub stagger_ticks: u32,
}

impl Default for Shuffle {
    fn default() -> Self {
        Self {
            selection: ShuffleSelection::EvenOdd,
            order: ShuffleOrder::Right,
            settle_ticks: 18,
            stagger_ticks: 1,
        }
    }
}

impl Shuffle {
    fn rank(&self, index: usize, len: usize) -> usize {
        match self.order {
            ShuffleOrder::Right => index,
            ShuffleOrder::Left => len - 1 - index,
        }
    }

    fn selects<R: Rng>(&self, rank: usize, rng: &mut R) -> bool {
        match self.selection {
            ShuffleSelection::EvenOdd => rank % 2 == 0,
            ShuffleSelection::Random => rng.gen_bool(0.5),
            ShuffleSelection::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Re-scramble everything for a fixed number of ticks, then snap.
    Simultaneous { max_iterations: u32 },
    /// Lock one more position per tick.
    Sequential(RevealDirection),
    /// Scramble a selection of glyphs and settle them one after another.
    Shuffle(Shuffle),
}

impl Default for RevealMode {
    fn default() -> Self {
        Self::Simultaneous {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    #[default]
    Hover,
    Visibility,
    Both,
}

impl Trigger {
    pub fn on_hover(self) -> bool {
        matches!(self, Self::Hover | Self::Both)
    }

    pub fn on_visibility(self) -> bool {
        matches!(self, Self::Visibility | Self::Both)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub mode: RevealMode,
    pub tick_interval: Duration,
    pub pool: CharacterPool,
    pub trigger: Trigger,
    /// Intersection ratio at which the element counts as in view.
    pub threshold: f64,
    /// Delay before the next run; `None` disables looping.
    pub loop_delay: Option<Duration>,
    pub respect_reduced_motion: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::default(),
            tick_interval: DEFAULT_TICK,
            pool: CharacterPool::default(),
            trigger: Trigger::default(),
            threshold: DEFAULT_THRESHOLD,
            loop_delay: None,
            respect_reduced_motion: true,
        }
    }
}

impl RevealConfig {
    pub fn sequential(mut self, direction: RevealDirection) -> Self {
        self.mode = RevealMode::Sequential(direction);
        self
    }

    pub fn simultaneous(mut self, max_iterations: u32) -> Self {
        self.mode = RevealMode::Simultaneous { max_iterations };
        self
    }

    pub fn shuffle(mut self, shuffle: Shuffle) -> Self {
        self.mode = RevealMode::Shuffle(shuffle);
        self
    }

    pub fn tick_every(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_pool(mut self, pool: CharacterPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn triggered_by(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn looping(mut self, delay: Duration) -> Self {
        self.loop_delay = Some(delay);
        self
    }

    pub fn ignore_reduced_motion(mut self) -> Self {
        self.respect_reduced_motion = false;
        self
    }
}

/// Identifies the run a timer was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// Resolved, waiting for the loop delay.
    Scheduled,
}

/// Timer instruction for whoever drives the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Release any timer and call [`RevealText::tick`] every `every`.
    Tick { token: RunToken, every: Duration },
    /// Leave the current timers alone.
    Keep,
    /// Stop ticking and call [`RevealText::loop_elapsed`] once after `after`.
    Rearm { token: RunToken, after: Duration },
    /// Release every timer.
    Halt,
    /// The callback belonged to a cancelled run; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct RevealText {
    target: Vec<char>,
    config: RevealConfig,
    locked: BTreeSet<usize>,
    display: String,
    phase: Phase,
    iterations: u32,
    /// Tick on which each shuffling index settles.
    deadlines: BTreeMap<usize, u32>,
    epoch: u64,
    in_view: bool,
    reduced_motion: bool,
}

impl RevealText {
    pub fn new(target: &str, config: RevealConfig) -> Self {
        Self {
            target: target.chars().collect(),
            config,
            locked: BTreeSet::new(),
            display: target.to_string(),
            phase: Phase::Idle,
            iterations: 0,
            deadlines: BTreeMap::new(),
            epoch: 0,
            in_view: false,
            reduced_motion: false,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn locked(&self) -> &BTreeSet<usize> {
        &self.locked
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Displayed characters paired with whether each one is final.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        let running = self.is_running();
        self.display
            .chars()
            .enumerate()
            .map(move |(i, c)| (c, !running || self.locked.contains(&i)))
    }

    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Directive {
        self.epoch += 1;
        self.locked.clear();
        self.deadlines.clear();
        self.iterations = 0;
        if self.target.is_empty() || self.motion_suppressed() {
            self.resolve();
            return Directive::Halt;
        }
        self.phase = Phase::Running;
        if let RevealMode::Shuffle(shuffle) = self.config.mode {
            self.plan_shuffle(shuffle, rng);
            if self.locked.len() == self.target.len() {
                return self.finish();
            }
        }
        self.scramble(rng);
        log::trace!("reveal run {} started for {:?}", self.epoch, self.display);
        Directive::Tick {
            token: self.token(),
            every: self.config.tick_interval,
        }
    }

    pub fn tick<R: Rng>(&mut self, token: RunToken, rng: &mut R) -> Directive {
        if token != self.token() || self.phase != Phase::Running {
            return Directive::Stale;
        }
        match self.config.mode {
            RevealMode::Simultaneous { max_iterations } => {
                self.scramble(rng);
                self.iterations += 1;
                if self.iterations >= max_iterations {
                    return self.finish();
                }
            }
            RevealMode::Sequential(direction) => {
                let next = self.next_index(direction);
                self.locked.insert(next);
                if self.locked.len() == self.target.len() {
                    return self.finish();
                }
                self.scramble(rng);
            }
            RevealMode::Shuffle(_) => {
                self.iterations += 1;
                let iterations = self.iterations;
                let locked = &mut self.locked;
                self.deadlines.retain(|&i, &mut due| {
                    if due <= iterations {
                        locked.insert(i);
                        false
                    } else {
                        true
                    }
                });
                if self.locked.len() == self.target.len() {
                    return self.finish();
                }
                self.scramble(rng);
            }
        }
        Directive::Keep
    }

    /// Pointer entered the element. Restarts the run when hover triggers it.
    pub fn hover<R: Rng>(&mut self, rng: &mut R) -> Directive {
        if !self.config.trigger.on_hover() {
            return Directive::Keep;
        }
        self.start(rng)
    }

    pub fn visibility_changed<R: Rng>(&mut self, in_view: bool, rng: &mut R) -> Directive {
        if !self.config.trigger.on_visibility() {
            return Directive::Keep;
        }
        self.in_view = in_view;
        match (in_view, self.phase) {
            (true, Phase::Running) => Directive::Keep,
            (true, _) => self.start(rng),
            (false, Phase::Idle) => Directive::Keep,
            (false, _) => self.cancel(),
        }
    }

    pub fn loop_elapsed<R: Rng>(&mut self, token: RunToken, rng: &mut R) -> Directive {
        if token != self.token() || self.phase != Phase::Scheduled {
            return Directive::Stale;
        }
        if !self.may_loop() {
            self.phase = Phase::Idle;
            return Directive::Halt;
        }
        self.start(rng)
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) -> Directive {
        self.reduced_motion = reduced;
        if self.motion_suppressed() && self.phase != Phase::Idle {
            return self.cancel();
        }
        Directive::Keep
    }

    /// Abandons the current run or pending loop and shows the target.
    pub fn cancel(&mut self) -> Directive {
        self.epoch += 1;
        self.resolve();
        Directive::Halt
    }

    /// Final cancellation when the owning view goes away.
    pub fn teardown(&mut self) {
        self.in_view = false;
        self.cancel();
        log::trace!("reveal for {:?} torn down", self.display);
    }

    fn token(&self) -> RunToken {
        RunToken(self.epoch)
    }

    fn motion_suppressed(&self) -> bool {
        self.reduced_motion && self.config.respect_reduced_motion
    }

    fn may_loop(&self) -> bool {
        !self.config.trigger.on_visibility() || self.in_view
    }

    fn resolve(&mut self) {
        self.phase = Phase::Idle;
        self.display = self.target.iter().collect();
    }

    fn finish(&mut self) -> Directive {
        self.resolve();
        self.epoch += 1;
        match self.config.loop_delay {
            Some(after) if self.may_loop() => {
                self.phase = Phase::Scheduled;
                Directive::Rearm {
                    token: self.token(),
                    after,
                }
            }
            _ => Directive::Halt,
        }
    }

    fn next_index(&self, direction: RevealDirection) -> usize {
        let len = self.target.len();
        let k = self.locked.len();
        let candidate = match direction {
            RevealDirection::Start => Some(k),
            RevealDirection::End => len.checked_sub(k + 1),
            RevealDirection::Center => {
                let middle = len / 2;
                let offset = k / 2;
                if k % 2 == 0 {
                    Some(middle + offset)
                } else {
                    middle.checked_sub(offset + 1)
                }
            }
        };
        match candidate {
            Some(i) if i < len && !self.locked.contains(&i) => i,
            _ => (0..len).find(|i| !self.locked.contains(i)).unwrap_or(0),
        }
    }

    /// Locks the glyphs a shuffle leaves alone and gives the rest their
    /// settle tick.
    fn plan_shuffle<R: Rng>(&mut self, shuffle: Shuffle, rng: &mut R) {
        let len = self.target.len();
        for (i, c) in self.target.iter().enumerate() {
            let rank = shuffle.rank(i, len);
            if c.is_whitespace() || !shuffle.selects(rank, rng) {
                self.locked.insert(i);
            } else {
                let due = shuffle.settle_ticks + rank as u32 * shuffle.stagger_ticks;
                self.deadlines.insert(i, due.max(1));
            }
        }
    }

    fn scramble<R: Rng>(&mut self, rng: &mut R) {
        let pool = &self.config.pool;
        let locked = &self.locked;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c.is_whitespace() || locked.contains(&i) {
                    c
                } else {
                    pool.pick(rng)
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn token_of(directive: Directive) -> RunToken {
        match directive {
            Directive::Tick { token, .. } | Directive::Rearm { token, .. } => token,
            other => panic!("expected an armed timer, got {other:?}"),
        }
    }

    // Index locked by each tick of a sequential run, in order.
    fn lock_order(text: &str, direction: RevealDirection) -> Vec<usize> {
        let mut rng = rng();
        let mut reveal = RevealText::new(text, RevealConfig::default().sequential(direction));
        let token = token_of(reveal.start(&mut rng));
        let mut order = Vec::new();
        while reveal.is_running() {
            let before = reveal.locked().clone();
            reveal.tick(token, &mut rng);
            let added = reveal
                .locked()
                .difference(&before)
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(added.len(), 1, "each tick locks exactly one index");
            order.push(added[0]);
        }
        order
    }

    #[test]
    fn test_spaces_never_scrambled() {
        let mut rng = rng();
        let text = "OPEN SOURCE  WORK";
        let mut reveal = RevealText::new(text, RevealConfig::default().simultaneous(25));
        let token = token_of(reveal.start(&mut rng));
        let spaces = text
            .char_indices()
            .filter(|(_, c)| *c == ' ')
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        loop {
            let display = reveal.display().chars().collect::<Vec<_>>();
            assert_eq!(display.len(), text.len());
            for &i in &spaces {
                assert_eq!(display[i], ' ');
            }
            if reveal.tick(token, &mut rng) != Directive::Keep {
                break;
            }
        }
        assert_eq!(reveal.display(), text);
    }

    #[test]
    fn test_scrambled_glyphs_come_from_pool() {
        let mut rng = rng();
        let pool = CharacterPool::new("#%").unwrap();
        let mut reveal = RevealText::new("abc def", RevealConfig::default().with_pool(pool));
        reveal.start(&mut rng);
        for c in reveal.display().chars().filter(|c| *c != ' ') {
            assert!(c == '#' || c == '%');
        }
    }

    #[test]
    fn test_simultaneous_finishes_after_max_iterations() {
        let mut rng = rng();
        let mut reveal = RevealText::new("DECRYPT", RevealConfig::default().simultaneous(4));
        let token = token_of(reveal.start(&mut rng));
        for _ in 0..3 {
            assert_eq!(reveal.tick(token, &mut rng), Directive::Keep);
            assert!(reveal.is_running());
        }
        assert_eq!(reveal.tick(token, &mut rng), Directive::Halt);
        assert_eq!(reveal.display(), "DECRYPT");
        assert_eq!(reveal.phase(), Phase::Idle);
        assert!(reveal.glyphs().all(|(_, resolved)| resolved));
    }

    #[test]
    fn test_sequential_locks_one_per_tick() {
        let text = "SEQUENTIAL";
        let order = lock_order(text, RevealDirection::Start);
        assert_eq!(order.len(), text.len());
        let unique = order.iter().collect::<BTreeSet<_>>();
        assert_eq!(unique.len(), text.len());
    }

    #[test]
    fn test_start_and_end_directions() {
        assert_eq!(lock_order("ABCDEFG", RevealDirection::Start), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(lock_order("ABCDEFG", RevealDirection::End), vec![6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_center_direction() {
        assert_eq!(lock_order("ABCDE", RevealDirection::Center), vec![2, 1, 3, 0, 4]);
        assert_eq!(lock_order("SKILLS", RevealDirection::Center), vec![3, 2, 4, 1, 5, 0]);
        assert_eq!(lock_order("A", RevealDirection::Center), vec![0]);
    }

    // Indices settled by each tick of a shuffle run, in order.
    fn settle_order(text: &str, shuffle: Shuffle) -> (BTreeSet<usize>, Vec<usize>) {
        let mut rng = rng();
        let mut reveal = RevealText::new(text, RevealConfig::default().shuffle(shuffle));
        let token = token_of(reveal.start(&mut rng));
        let untouched = reveal.locked().clone();
        let mut order = Vec::new();
        while reveal.is_running() {
            let before = reveal.locked().clone();
            reveal.tick(token, &mut rng);
            order.extend(reveal.locked().difference(&before).copied());
        }
        assert_eq!(reveal.display(), text);
        (untouched, order)
    }

    #[test]
    fn test_shuffle_even_odd_skips_odd_ranks() {
        let shuffle = Shuffle {
            selection: ShuffleSelection::EvenOdd,
            order: ShuffleOrder::Right,
            settle_ticks: 3,
            stagger_ticks: 1,
        };
        let (untouched, order) = settle_order("OPEN SOURCE", shuffle);
        assert_eq!(untouched, BTreeSet::from([1, 3, 4, 5, 7, 9]));
        assert_eq!(order, vec![0, 2, 6, 8, 10]);
    }

    #[test]
    fn test_shuffle_left_settles_from_the_end() {
        let shuffle = Shuffle {
            selection: ShuffleSelection::All,
            order: ShuffleOrder::Left,
            settle_ticks: 2,
            stagger_ticks: 1,
        };
        let (untouched, order) = settle_order("ABCDE", shuffle);
        assert!(untouched.is_empty());
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_shuffle_stagger_spaces_out_settling() {
        let mut rng = rng();
        let shuffle = Shuffle {
            selection: ShuffleSelection::All,
            order: ShuffleOrder::Right,
            settle_ticks: 2,
            stagger_ticks: 3,
        };
        let mut reveal = RevealText::new("ABC", RevealConfig::default().shuffle(shuffle));
        let token = token_of(reveal.start(&mut rng));
        let mut settled_on = Vec::new();
        let mut tick = 0;
        while reveal.is_running() {
            tick += 1;
            let before = reveal.locked().len();
            reveal.tick(token, &mut rng);
            if reveal.locked().len() > before {
                settled_on.push(tick);
            }
        }
        assert_eq!(settled_on, vec![2, 5, 8]);
    }

    #[test]
    fn test_shuffle_random_selection_is_seeded() {
        let shuffle = Shuffle {
            selection: ShuffleSelection::Random,
            ..Shuffle::default()
        };
        let text = "OPEN SOURCE CONTRIBUTIONS";
        let first = settle_order(text, shuffle);
        let second = settle_order(text, shuffle);
        assert_eq!(first, second);
        assert!(first.0.contains(&4));
        assert_eq!(first.0.len() + first.1.len(), text.chars().count());
    }

    #[test]
    fn test_shuffle_with_nothing_selected_finishes_at_start() {
        let mut rng = rng();
        let config = RevealConfig::default()
            .shuffle(Shuffle::default())
            .looping(Duration::from_millis(500));
        let mut reveal = RevealText::new(" ", config);
        assert!(matches!(reveal.start(&mut rng), Directive::Rearm { .. }));
        assert_eq!(reveal.display(), " ");
        assert_eq!(reveal.phase(), Phase::Scheduled);
    }

    #[test]
    fn test_skills_scenario() {
        let mut rng = rng();
        let mut reveal = RevealText::new(
            "SKILLS",
            RevealConfig::default().sequential(RevealDirection::Start),
        );
        let token = token_of(reveal.start(&mut rng));

        assert_eq!(reveal.tick(token, &mut rng), Directive::Keep);
        assert!(reveal.locked().contains(&0));
        assert!(reveal.display().starts_with('S'));
        let resolved = reveal.glyphs().map(|(_, r)| r).collect::<Vec<_>>();
        assert_eq!(resolved, vec![true, false, false, false, false, false]);

        for _ in 2..6 {
            assert_eq!(reveal.tick(token, &mut rng), Directive::Keep);
        }
        assert_eq!(reveal.tick(token, &mut rng), Directive::Halt);
        assert!(reveal.locked().contains(&5));
        assert_eq!(reveal.locked().len(), 6);
        assert_eq!(reveal.display(), "SKILLS");
        assert!(!reveal.is_running());
    }

    #[test]
    fn test_empty_target_resolves_immediately() {
        let mut rng = rng();
        let mut reveal = RevealText::new("", RevealConfig::default().looping(Duration::from_secs(1)));
        assert_eq!(reveal.start(&mut rng), Directive::Halt);
        assert_eq!(reveal.display(), "");
        assert_eq!(reveal.phase(), Phase::Idle);
    }

    #[test]
    fn test_hover_respects_trigger() {
        let mut rng = rng();
        let config = RevealConfig::default().triggered_by(Trigger::Visibility);
        let mut reveal = RevealText::new("VIEW", config);
        assert_eq!(reveal.hover(&mut rng), Directive::Keep);
        assert!(!reveal.is_running());

        let mut reveal = RevealText::new("BOTH", RevealConfig::default().triggered_by(Trigger::Both));
        assert!(matches!(reveal.hover(&mut rng), Directive::Tick { .. }));
        // a second hover restarts with a fresh token
        let first = reveal.token();
        assert!(matches!(reveal.hover(&mut rng), Directive::Tick { .. }));
        assert_eq!(reveal.tick(first, &mut rng), Directive::Stale);
    }

    #[test]
    fn test_visibility_does_not_restart_running() {
        let mut rng = rng();
        let config = RevealConfig::default().triggered_by(Trigger::Visibility);
        let mut reveal = RevealText::new("ABOUT", config);
        let token = token_of(reveal.visibility_changed(true, &mut rng));
        assert_eq!(reveal.visibility_changed(true, &mut rng), Directive::Keep);
        assert_eq!(reveal.tick(token, &mut rng), Directive::Keep);
    }

    #[test]
    fn test_leaving_view_cancels_run() {
        let mut rng = rng();
        let config = RevealConfig::default().triggered_by(Trigger::Visibility);
        let mut reveal = RevealText::new("ABOUT", config);
        let token = token_of(reveal.visibility_changed(true, &mut rng));
        assert_eq!(reveal.visibility_changed(false, &mut rng), Directive::Halt);
        assert_eq!(reveal.display(), "ABOUT");
        assert_eq!(reveal.tick(token, &mut rng), Directive::Stale);
    }

    #[test]
    fn test_teardown_stops_all_mutation() {
        let mut rng = rng();
        let mut reveal = RevealText::new("PROJECTS", RevealConfig::default());
        let token = token_of(reveal.start(&mut rng));
        reveal.tick(token, &mut rng);
        reveal.teardown();
        let frozen = reveal.display().to_string();
        for _ in 0..20 {
            assert_eq!(reveal.tick(token, &mut rng), Directive::Stale);
            assert_eq!(reveal.loop_elapsed(token, &mut rng), Directive::Stale);
        }
        assert_eq!(reveal.display(), frozen);
        assert_eq!(frozen, "PROJECTS");
    }

    #[test]
    fn test_reduced_motion() {
        let mut rng = rng();
        let mut reveal = RevealText::new("CALM", RevealConfig::default());
        reveal.set_reduced_motion(true);
        assert_eq!(reveal.start(&mut rng), Directive::Halt);
        assert_eq!(reveal.display(), "CALM");

        let mut reveal = RevealText::new("CALM", RevealConfig::default());
        let token = token_of(reveal.start(&mut rng));
        assert_eq!(reveal.set_reduced_motion(true), Directive::Halt);
        assert_eq!(reveal.display(), "CALM");
        assert_eq!(reveal.tick(token, &mut rng), Directive::Stale);

        let mut reveal = RevealText::new("WILD", RevealConfig::default().ignore_reduced_motion());
        reveal.set_reduced_motion(true);
        assert!(matches!(reveal.start(&mut rng), Directive::Tick { .. }));
    }

    #[test]
    fn test_hover_only_loops_without_view() {
        let mut rng = rng();
        let config = RevealConfig::default()
            .simultaneous(1)
            .looping(Duration::from_millis(500));
        let mut reveal = RevealText::new("LOOP", config);
        let token = token_of(reveal.hover(&mut rng));
        let rearm = reveal.tick(token, &mut rng);
        assert_eq!(
            rearm,
            Directive::Rearm {
                token: token_of(rearm),
                after: Duration::from_millis(500)
            }
        );
        assert_eq!(reveal.phase(), Phase::Scheduled);
        assert!(matches!(
            reveal.loop_elapsed(token_of(rearm), &mut rng),
            Directive::Tick { .. }
        ));
    }

    #[test]
    fn test_character_pool() {
        assert_eq!(CharacterPool::new(""), Err(RevealError::EmptyPool));
        assert_eq!(CharacterPool::new("   "), Err(RevealError::EmptyPool));
        let pool = CharacterPool::from_text("HELLO WORLD").unwrap();
        assert_eq!(pool.len(), 7);
        assert!(pool.contains('L'));
        assert!(!pool.contains(' '));
        assert_eq!(CharacterPool::default().len(), DEFAULT_POOL.len());
        assert_eq!(CharacterPool::new(SHUFFLE_POOL).map(|p| p.len()), Ok(70));
    }

    /// Millisecond clock standing in for the browser's timers.
    #[derive(Default)]
    struct Clock {
        now: u64,
        ticker: Option<(RunToken, u64, u64)>,
        alarm: Option<(RunToken, u64)>,
        starts: Vec<u64>,
        finishes: Vec<u64>,
    }

    impl Clock {
        fn apply(&mut self, directive: Directive) {
            match directive {
                Directive::Tick { token, every } => {
                    let every = every.as_millis() as u64;
                    self.alarm = None;
                    self.ticker = Some((token, every, self.now + every));
                    self.starts.push(self.now);
                }
                Directive::Rearm { token, after } => {
                    self.ticker = None;
                    self.alarm = Some((token, self.now + after.as_millis() as u64));
                    self.finishes.push(self.now);
                }
                Directive::Halt => {
                    if self.ticker.is_some() {
                        self.finishes.push(self.now);
                    }
                    self.ticker = None;
                    self.alarm = None;
                }
                Directive::Keep | Directive::Stale => {}
            }
        }

        fn run_until(&mut self, reveal: &mut RevealText, rng: &mut StdRng, until: u64) {
            loop {
                let next_tick = self.ticker.map(|(_, _, at)| at);
                let next_alarm = self.alarm.map(|(_, at)| at);
                let next = match (next_tick, next_alarm) {
                    (Some(t), Some(a)) => t.min(a),
                    (Some(t), None) => t,
                    (None, Some(a)) => a,
                    (None, None) => break,
                };
                if next > until {
                    break;
                }
                self.now = next;
                if next_tick == Some(next) {
                    let (token, every, at) = self.ticker.expect("ticker is armed");
                    self.ticker = Some((token, every, at + every));
                    let directive = reveal.tick(token, rng);
                    self.apply(directive);
                } else {
                    let (token, _) = self.alarm.take().expect("alarm is armed");
                    let directive = reveal.loop_elapsed(token, rng);
                    self.apply(directive);
                }
            }
            self.now = until;
        }
    }

    #[test]
    fn test_loop_timing_follows_visibility() {
        let mut rng = rng();
        let config = RevealConfig::default()
            .sequential(RevealDirection::Start)
            .tick_every(Duration::from_millis(50))
            .triggered_by(Trigger::Visibility)
            .looping(Duration::from_millis(2000));
        let mut reveal = RevealText::new("ABC", config);
        let mut clock = Clock::default();

        let directive = reveal.visibility_changed(true, &mut rng);
        clock.apply(directive);
        clock.run_until(&mut reveal, &mut rng, 2400);

        // first run resolves after three ticks, the loop restarts one delay later
        assert_eq!(clock.starts, vec![0, 2150]);
        assert_eq!(clock.finishes[0], 150);
        let gap = clock.starts[1] - clock.finishes[0];
        assert!((1950..=2050).contains(&gap));

        // second run finished at 2300 and re-armed; leaving view drops that loop
        let directive = reveal.visibility_changed(false, &mut rng);
        clock.apply(directive);
        assert!(clock.alarm.is_none());
        clock.run_until(&mut reveal, &mut rng, 10_000);
        assert_eq!(clock.starts.len(), 2);
        assert_eq!(reveal.display(), "ABC");

        // coming back starts a fresh run right away
        let directive = reveal.visibility_changed(true, &mut rng);
        clock.apply(directive);
        assert_eq!(clock.starts.last(), Some(&10_000));
    }

    #[test]
    fn test_stale_loop_after_restart() {
        let mut rng = rng();
        let config = RevealConfig::default()
            .simultaneous(1)
            .looping(Duration::from_millis(100));
        let mut reveal = RevealText::new("HI", config);
        let token = token_of(reveal.start(&mut rng));
        let loop_token = token_of(reveal.tick(token, &mut rng));
        // hovering again before the loop fires supersedes it
        reveal.hover(&mut rng);
        assert_eq!(reveal.loop_elapsed(loop_token, &mut rng), Directive::Stale);
        assert!(reveal.is_running());
    }
}

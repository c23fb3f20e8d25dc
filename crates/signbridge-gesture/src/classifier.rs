//! Rule-based gesture classification
//!
//! Classification is a priority cascade: rules are tried in order and the
//! first whose predicate holds decides the label. Order matters. A pinch
//! with spread fingers must win over anything the spread fingers would
//! otherwise suggest, and a thumb-only hand is checked for up/down before
//! the fist test can claim it.
//!
//! The classifier is total. Short or non-finite input is `unknown`, and no
//! rule can index outside the normalized hand.

use serde::{Deserialize, Serialize};
use signbridge_core::{
    Finger, GestureLabel, Handedness, Landmark, SignBridgeError, SignBridgeResult,
};
use tracing::trace;

use crate::{normalize, tightly_curled_count, FingerStates, NormalizedHand};

// ============================================================================
// CONFIG
// ============================================================================

/// Geometric thresholds, all in normalized units (wrist → middle MCP = 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// How far a long fingertip must rise above its PIP joint to count as extended.
    pub extension_margin: f32,
    /// Horizontal thumb tip offset past the IP joint to count as extended.
    pub thumb_margin: f32,
    /// Maximum thumb-tip ↔ index-tip distance for the "ok" pinch.
    pub pinch_threshold: f32,
    /// Dead zone around the wrist height for thumbs up/down.
    pub thumb_dead_zone: f32,
    /// Margin of the tight-curl test used by "fist".
    pub curl_margin: f32,
    /// Fingers (of five) that must be tightly curled for "fist".
    pub min_curled_fingers: usize,
    /// Height of the index tip above the wrist for "pointing_up".
    pub pointing_margin: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extension_margin: 0.025,
            thumb_margin: 0.03,
            pinch_threshold: 0.07,
            thumb_dead_zone: 0.08,
            curl_margin: 0.005,
            min_curled_fingers: 4,
            pointing_margin: 0.05,
        }
    }
}

impl ClassifierConfig {
    /// Every threshold must be finite and positive
    pub fn validate(&self) -> SignBridgeResult<()> {
        let thresholds = [
            ("extension_margin", self.extension_margin),
            ("thumb_margin", self.thumb_margin),
            ("pinch_threshold", self.pinch_threshold),
            ("thumb_dead_zone", self.thumb_dead_zone),
            ("curl_margin", self.curl_margin),
            ("pointing_margin", self.pointing_margin),
        ];
        for (name, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(SignBridgeError::InvalidThreshold { name, value });
            }
        }
        if !(1..=5).contains(&self.min_curled_fingers) {
            return Err(SignBridgeError::InvalidConfig(format!(
                "min_curled_fingers must be between 1 and 5, got {}",
                self.min_curled_fingers
            )));
        }
        Ok(())
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Everything a rule predicate may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub hand: &'a NormalizedHand,
    pub fingers: FingerStates,
    pub config: &'a ClassifierConfig,
}

/// One step of the cascade
#[derive(Clone, Copy)]
pub struct GestureRule {
    /// Stable identifier for logs and tests
    pub name: &'static str,
    pub label: GestureLabel,
    predicate: fn(&RuleContext<'_>) -> bool,
}

impl GestureRule {
    pub fn matches(&self, ctx: &RuleContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

impl std::fmt::Debug for GestureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

/// The cascade, highest priority first. No match means `unknown`.
pub const CASCADE: [GestureRule; 9] = [
    GestureRule {
        name: "pinch_with_spread",
        label: GestureLabel::Ok,
        predicate: pinch_with_spread,
    },
    GestureRule {
        name: "thumb_above_wrist",
        label: GestureLabel::ThumbsUp,
        predicate: thumb_above_wrist,
    },
    GestureRule {
        name: "thumb_below_wrist",
        label: GestureLabel::ThumbsDown,
        predicate: thumb_below_wrist,
    },
    GestureRule {
        name: "all_extended",
        label: GestureLabel::OpenPalm,
        predicate: all_extended,
    },
    GestureRule {
        name: "tight_curl",
        label: GestureLabel::Fist,
        predicate: tight_curl,
    },
    GestureRule {
        name: "index_middle",
        label: GestureLabel::Peace,
        predicate: index_middle,
    },
    GestureRule {
        name: "index_raised",
        label: GestureLabel::PointingUp,
        predicate: index_raised,
    },
    GestureRule {
        name: "thumb_index_pinky",
        label: GestureLabel::Ily,
        predicate: thumb_index_pinky,
    },
    GestureRule {
        name: "index_only",
        label: GestureLabel::PointForward,
        predicate: index_only,
    },
];

fn pinch_with_spread(ctx: &RuleContext<'_>) -> bool {
    let gap = ctx.hand.tip(Finger::Index).distance_2d(ctx.hand.tip(Finger::Thumb));
    gap < ctx.config.pinch_threshold && ctx.fingers.any_spread()
}

fn thumb_alone(ctx: &RuleContext<'_>) -> bool {
    ctx.fingers.thumb && ctx.fingers.long_fingers_curled()
}

fn thumb_above_wrist(ctx: &RuleContext<'_>) -> bool {
    thumb_alone(ctx) && ctx.hand.tip(Finger::Thumb).y < ctx.hand.wrist().y - ctx.config.thumb_dead_zone
}

fn thumb_below_wrist(ctx: &RuleContext<'_>) -> bool {
    thumb_alone(ctx) && ctx.hand.tip(Finger::Thumb).y > ctx.hand.wrist().y + ctx.config.thumb_dead_zone
}

fn all_extended(ctx: &RuleContext<'_>) -> bool {
    ctx.fingers.all_extended()
}

fn tight_curl(ctx: &RuleContext<'_>) -> bool {
    !ctx.fingers.thumb
        && tightly_curled_count(ctx.hand, ctx.config.curl_margin) >= ctx.config.min_curled_fingers
}

fn index_middle(ctx: &RuleContext<'_>) -> bool {
    let f = &ctx.fingers;
    f.index && f.middle && !f.ring && !f.pinky
}

fn index_raised(ctx: &RuleContext<'_>) -> bool {
    ctx.fingers.only_index()
        && ctx.hand.tip(Finger::Index).y < ctx.hand.wrist().y - ctx.config.pointing_margin
}

fn thumb_index_pinky(ctx: &RuleContext<'_>) -> bool {
    let f = &ctx.fingers;
    f.thumb && f.index && f.pinky && !f.middle && !f.ring
}

fn index_only(ctx: &RuleContext<'_>) -> bool {
    ctx.fingers.only_index()
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Outcome of one classification, with the evidence that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: GestureLabel,
    /// Name of the rule that fired, `None` for `unknown`
    pub rule: Option<&'static str>,
    /// Finger states, `None` when the landmarks were unusable
    pub fingers: Option<FingerStates>,
}

impl Classification {
    fn unusable() -> Self {
        Self {
            label: GestureLabel::Unknown,
            rule: None,
            fingers: None,
        }
    }
}

/// Stateless classifier over the rule cascade
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &'static [GestureRule] {
        &CASCADE
    }

    /// Classify one raw hand pose
    pub fn classify(&self, landmarks: &[Landmark], handedness: Handedness) -> GestureLabel {
        self.explain(landmarks, handedness).label
    }

    /// Classify and report which rule fired
    pub fn explain(&self, landmarks: &[Landmark], handedness: Handedness) -> Classification {
        match normalize(landmarks) {
            Some(hand) => self.classify_normalized(&hand, handedness),
            None => {
                trace!("Unusable hand pose ({} points)", landmarks.len());
                Classification::unusable()
            }
        }
    }

    /// Run the cascade on an already normalized hand
    pub fn classify_normalized(&self, hand: &NormalizedHand, handedness: Handedness) -> Classification {
        let ctx = self.context(hand, handedness);

        for rule in self.rules() {
            if rule.matches(&ctx) {
                trace!("Gesture rule {} matched: {}", rule.name, rule.label);
                return Classification {
                    label: rule.label,
                    rule: Some(rule.name),
                    fingers: Some(ctx.fingers),
                };
            }
        }

        Classification {
            label: GestureLabel::Unknown,
            rule: None,
            fingers: Some(ctx.fingers),
        }
    }

    /// Build the predicate context for a hand
    pub fn context<'a>(&'a self, hand: &'a NormalizedHand, handedness: Handedness) -> RuleContext<'a> {
        RuleContext {
            hand,
            fingers: FingerStates::extract(
                hand,
                handedness,
                self.config.extension_margin,
                self.config.thumb_margin,
            ),
            config: &self.config,
        }
    }
}

/// Classify with the default thresholds
pub fn classify_gesture(landmarks: &[Landmark], handedness: Handedness) -> GestureLabel {
    GestureClassifier::default().classify(landmarks, handedness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signbridge_core::LANDMARK_COUNT;

    // Poses are written directly in the normalized frame: wrist at the
    // origin, middle MCP one unit above it, y growing downwards.

    const EXTENDED: f32 = -0.6;
    const CURLED: f32 = 0.3;

    struct Pose {
        points: Vec<Landmark>,
    }

    impl Pose {
        fn new() -> Self {
            let mut points = vec![Landmark::default(); LANDMARK_COUNT];
            points[1] = Landmark::xy(0.3, -0.2);
            points[2] = Landmark::xy(0.5, -0.4);
            points[3] = Landmark::xy(0.6, -0.6);
            let bases = [(5, 0.3, -1.0), (9, 0.0, -1.0), (13, -0.25, -0.95), (17, -0.45, -0.85)];
            for (mcp, x, y) in bases {
                points[mcp] = Landmark::xy(x, y);
                points[mcp + 1] = Landmark::xy(x, y - 0.4);
            }
            let mut pose = Self { points };
            pose = pose.thumb_curled();
            for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
                pose = pose.finger(finger, false);
            }
            pose
        }

        fn finger(mut self, finger: Finger, extended: bool) -> Self {
            let pip = self.points[finger.pip()];
            let dy = if extended { EXTENDED } else { CURLED };
            self.points[finger.pip() + 1] = Landmark::xy(pip.x, pip.y + dy / 2.0);
            self.points[finger.tip()] = Landmark::xy(pip.x, pip.y + dy);
            self
        }

        fn thumb_curled(mut self) -> Self {
            self.points[4] = Landmark::xy(0.5, -0.7);
            self
        }

        fn thumb_out(mut self, tip_y: f32) -> Self {
            self.points[4] = Landmark::xy(1.0, tip_y);
            self
        }

        fn set(mut self, index: usize, x: f32, y: f32) -> Self {
            self.points[index] = Landmark::xy(x, y);
            self
        }

        fn classify(&self) -> GestureLabel {
            classify_gesture(&self.points, Handedness::Right)
        }
    }

    #[test]
    fn test_fist() {
        assert_eq!(Pose::new().classify(), GestureLabel::Fist);
    }

    #[test]
    fn test_thumbs_up_and_down() {
        assert_eq!(Pose::new().thumb_out(-0.6).classify(), GestureLabel::ThumbsUp);
        assert_eq!(Pose::new().thumb_out(0.5).classify(), GestureLabel::ThumbsDown);
    }

    #[test]
    fn test_thumb_in_dead_zone_falls_through() {
        // Thumb out but level with the wrist: not up, not down, and the
        // extended thumb also blocks the fist rule.
        let pose = Pose::new().thumb_out(0.02);
        let explained = GestureClassifier::default().explain(&pose.points, Handedness::Right);
        assert_eq!(explained.label, GestureLabel::Unknown);
        assert!(explained.rule.is_none());
    }

    #[test]
    fn test_open_palm() {
        let pose = Pose::new()
            .thumb_out(-0.6)
            .finger(Finger::Index, true)
            .finger(Finger::Middle, true)
            .finger(Finger::Ring, true)
            .finger(Finger::Pinky, true);
        assert_eq!(pose.classify(), GestureLabel::OpenPalm);
    }

    #[test]
    fn test_peace() {
        let pose = Pose::new().finger(Finger::Index, true).finger(Finger::Middle, true);
        assert_eq!(pose.classify(), GestureLabel::Peace);
    }

    #[test]
    fn test_pointing_up() {
        assert_eq!(
            Pose::new().finger(Finger::Index, true).classify(),
            GestureLabel::PointingUp
        );
    }

    #[test]
    fn test_point_forward() {
        // Index held sideways at wrist height: extended, but not above the wrist
        let pose = Pose::new().set(6, 0.3, 0.1).set(7, 0.6, 0.05).set(8, 0.9, 0.0);
        assert_eq!(pose.classify(), GestureLabel::PointForward);
    }

    #[test]
    fn test_ily() {
        let pose = Pose::new()
            .thumb_out(-0.6)
            .finger(Finger::Index, true)
            .finger(Finger::Pinky, true);
        assert_eq!(pose.classify(), GestureLabel::Ily);
    }

    #[test]
    fn test_ok_needs_spread_finger() {
        let pinch = Pose::new()
            .set(4, 0.48, -1.2)
            .set(8, 0.45, -1.2)
            .finger(Finger::Middle, true)
            .finger(Finger::Ring, true)
            .finger(Finger::Pinky, true);
        assert_eq!(pinch.classify(), GestureLabel::Ok);

        // Same pinch with every other finger curled is a closed hand, not "ok"
        let closed = Pose::new().set(4, 0.48, -1.2).set(8, 0.45, -1.2);
        assert_eq!(closed.classify(), GestureLabel::Fist);
    }

    #[test]
    fn test_handedness_changes_thumb_gestures() {
        let pose = Pose::new().thumb_out(-0.6);
        let classifier = GestureClassifier::default();
        assert_eq!(classifier.classify(&pose.points, Handedness::Right), GestureLabel::ThumbsUp);
        assert_eq!(classifier.classify(&pose.points, Handedness::Left), GestureLabel::Fist);

        // Mirrored thumb: tip to the left of the IP joint
        let mirrored = Pose::new().set(4, 0.2, -0.6);
        assert_eq!(classifier.classify(&mirrored.points, Handedness::Left), GestureLabel::ThumbsUp);
    }

    #[test]
    fn test_malformed_input_is_unknown() {
        let pose = Pose::new();
        assert_eq!(classify_gesture(&pose.points[..20], Handedness::Right), GestureLabel::Unknown);
        assert_eq!(classify_gesture(&[], Handedness::Left), GestureLabel::Unknown);

        let mut bad = pose.points.clone();
        bad[12].y = f32::NAN;
        let explained = GestureClassifier::default().explain(&bad, Handedness::Right);
        assert_eq!(explained.label, GestureLabel::Unknown);
        assert!(explained.fingers.is_none());
    }

    #[test]
    fn test_cascade_order() {
        let names: Vec<&str> = CASCADE.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "pinch_with_spread",
                "thumb_above_wrist",
                "thumb_below_wrist",
                "all_extended",
                "tight_curl",
                "index_middle",
                "index_raised",
                "thumb_index_pinky",
                "index_only",
            ]
        );
    }

    #[test]
    fn test_rules_individually() {
        let pose = Pose::new().finger(Finger::Index, true);
        let hand = normalize(&pose.points).unwrap();
        let classifier = GestureClassifier::default();
        let ctx = classifier.context(&hand, Handedness::Right);

        let matching: Vec<&str> = classifier
            .rules()
            .iter()
            .filter(|r| r.matches(&ctx))
            .map(|r| r.name)
            .collect();
        // Both pointing rules hold; priority picks the raised one
        assert_eq!(matching, vec!["index_raised", "index_only"]);
        assert_eq!(classifier.classify_normalized(&hand, Handedness::Right).rule, Some("index_raised"));
    }

    #[test]
    fn test_config_validation() {
        assert!(ClassifierConfig::default().validate().is_ok());

        let negative = ClassifierConfig {
            pinch_threshold: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(SignBridgeError::InvalidThreshold { name: "pinch_threshold", .. })
        ));

        let too_many = ClassifierConfig {
            min_curled_fingers: 6,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ClassifierConfig = serde_json::from_str(r#"{"pinch_threshold": 0.1}"#).unwrap();
        assert_eq!(config.pinch_threshold, 0.1);
        assert_eq!(config.extension_margin, 0.025);
    }
}

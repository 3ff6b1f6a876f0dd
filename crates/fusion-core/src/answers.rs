use std::fmt;
use std::str::FromStr;

use crate::error::FusionError;
use crate::tables::VisualParams;

/// One of the three answer categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Motivation,
    Rhythm,
    Friction,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Motivation => "motivation",
            Dimension::Rhythm => "rhythm",
            Dimension::Friction => "friction",
        })
    }
}

/// Declares a closed answer enumeration with lowercase names for parsing
/// and display.
macro_rules! answer_enum {
    ($(#[$meta:meta])* $name:ident, $dimension:expr, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: [$name; 10] = [$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FusionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(FusionError::UnknownAnswer {
                        dimension: $dimension,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

answer_enum!(
    /// What keeps the user going; sets the liquid's colors.
    Motivation, Dimension::Motivation, {
        Steady => "steady",
        Strong => "strong",
        Clear => "clear",
        Connected => "connected",
        Free => "free",
        Growing => "growing",
        Alive => "alive",
        Balanced => "balanced",
        Secure => "secure",
        Light => "light",
    }
);

answer_enum!(
    /// How the user moves; sets the flow dynamics.
    Rhythm, Dimension::Rhythm, {
        Discipline => "discipline",
        Consistency => "consistency",
        Momentum => "momentum",
        Intention => "intention",
        Curiosity => "curiosity",
        Adaptability => "adaptability",
        Persistence => "persistence",
        Structure => "structure",
        Intuition => "intuition",
        Collaboration => "collaboration",
    }
);

answer_enum!(
    /// What gets in the way; sets the disturbance effects.
    Friction, Dimension::Friction, {
        Overload => "overload",
        Distraction => "distraction",
        Doubt => "doubt",
        Tension => "tension",
        Delay => "delay",
        Fog => "fog",
        Disorder => "disorder",
        Depletion => "depletion",
        Resistance => "resistance",
        Weight => "weight",
    }
);

/// The user's selections. Any subset may be present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnswerSet {
    pub motivation: Option<Motivation>,
    pub rhythm: Option<Rhythm>,
    pub friction: Option<Friction>,
}

impl AnswerSet {
    pub fn new(
        motivation: Option<Motivation>,
        rhythm: Option<Rhythm>,
        friction: Option<Friction>,
    ) -> Self {
        Self {
            motivation,
            rhythm,
            friction,
        }
    }

    /// Parse optional answer names as delivered by the host view.
    pub fn parse(
        motivation: Option<&str>,
        rhythm: Option<&str>,
        friction: Option<&str>,
    ) -> Result<Self, FusionError> {
        Ok(Self {
            motivation: motivation.map(str::parse).transpose()?,
            rhythm: rhythm.map(str::parse).transpose()?,
            friction: friction.map(str::parse).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.motivation.is_none() && self.rhythm.is_none() && self.friction.is_none()
    }

    /// Dimensions that carry an answer, in spawn order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        let mut present = Vec::with_capacity(3);
        if self.motivation.is_some() {
            present.push(Dimension::Motivation);
        }
        if self.rhythm.is_some() {
            present.push(Dimension::Rhythm);
        }
        if self.friction.is_some() {
            present.push(Dimension::Friction);
        }
        present
    }

    pub fn visual_params(&self) -> VisualParams {
        VisualParams {
            palette: self.motivation.map(Motivation::palette),
            flow: self.rhythm.map(Rhythm::flow),
            tension: self.friction.map(Friction::tension),
        }
    }
}

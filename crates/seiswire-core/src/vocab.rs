//! # Closed Vocabularies
//!
//! Every categorical wire field draws its legal values from exactly one of
//! the enums defined here. This is the single definition of each label set;
//! validators, tests, and documentation all consult the same enum, so a
//! vocabulary cannot silently diverge between the place that writes a label
//! and the place that checks it.
//!
//! Matching is case-sensitive and exact. Message fields stay `Option<String>`
//! on the structs themselves: an out-of-vocabulary label must remain
//! representable so that validation, not decoding, reports it.

use std::str::FromStr;

use crate::error::UnknownLabelError;

/// Common surface of the closed vocabularies.
///
/// A vocabulary is a fixed set of string labels. `from_label` is exact and
/// case-sensitive: substrings, prefixes, and casing variants match nothing.
pub trait Vocabulary: Copy + Eq + Sized + 'static {
    /// The vocabulary name used in error reports (e.g. `"phase"`).
    const NAME: &'static str;

    /// Every variant, in canonical order.
    fn all() -> &'static [Self];

    /// The exact wire label of this variant.
    fn as_str(&self) -> &'static str;

    /// Match a label against the vocabulary; `None` when outside it.
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }
}

fn parse_label<V: Vocabulary>(label: &str) -> Result<V, UnknownLabelError> {
    V::from_label(label).ok_or_else(|| UnknownLabelError {
        vocabulary: V::NAME,
        label: label.to_string(),
    })
}

/// A seismic phase label, shared by the phase fields of picks, correlations,
/// and association info.
///
/// The set covers the standard body-wave, core, and crustal phases an
/// associator assigns. Labels follow the IASPEI convention and are
/// case-significant: `PcP` and `PCP` are different strings and only the
/// former is a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Direct compressional wave.
    P,
    /// Direct shear wave.
    S,
    /// Head wave refracted along the Moho, compressional.
    Pn,
    /// Head wave refracted along the Moho, shear.
    Sn,
    /// Crustal compressional wave.
    Pg,
    /// Crustal shear wave.
    Sg,
    /// Mid-crustal compressional wave.
    Pb,
    /// Mid-crustal shear wave.
    Sb,
    /// Compressional reflection off the core-mantle boundary.
    PcP,
    /// Shear reflection off the core-mantle boundary.
    ScS,
    /// Compressional wave through the outer core.
    PKP,
    /// Shear wave traversing the outer core as a compressional wave.
    SKS,
    /// Outer-core compressional wave, AB branch.
    PKPab,
    /// Outer-core compressional wave, BC branch.
    PKPbc,
    /// Compressional wave through the inner core, DF branch.
    PKPdf,
    /// Compressional reflection off the inner-core boundary.
    PKiKP,
    /// Compressional wave diffracted around the core.
    Pdiff,
    /// Shear wave diffracted around the core.
    Sdiff,
    /// Crustal guided wave.
    Lg,
    /// Short-period Rayleigh wave.
    Rg,
}

impl Vocabulary for Phase {
    const NAME: &'static str = "phase";

    fn all() -> &'static [Self] {
        &[
            Self::P,
            Self::S,
            Self::Pn,
            Self::Sn,
            Self::Pg,
            Self::Sg,
            Self::Pb,
            Self::Sb,
            Self::PcP,
            Self::ScS,
            Self::PKP,
            Self::SKS,
            Self::PKPab,
            Self::PKPbc,
            Self::PKPdf,
            Self::PKiKP,
            Self::Pdiff,
            Self::Sdiff,
            Self::Lg,
            Self::Rg,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::P => "P",
            Self::S => "S",
            Self::Pn => "Pn",
            Self::Sn => "Sn",
            Self::Pg => "Pg",
            Self::Sg => "Sg",
            Self::Pb => "Pb",
            Self::Sb => "Sb",
            Self::PcP => "PcP",
            Self::ScS => "ScS",
            Self::PKP => "PKP",
            Self::SKS => "SKS",
            Self::PKPab => "PKPab",
            Self::PKPbc => "PKPbc",
            Self::PKPdf => "PKPdf",
            Self::PKiKP => "PKiKP",
            Self::Pdiff => "Pdiff",
            Self::Sdiff => "Sdiff",
            Self::Lg => "Lg",
            Self::Rg => "Rg",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of a seismic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A naturally occurring tectonic earthquake.
    Earthquake,
    /// Collapse of an underground mine working.
    MineCollapse,
    /// A nuclear test explosion.
    NuclearExplosion,
    /// An industrial quarry or mining blast.
    QuarryBlast,
    /// Seismicity induced or triggered by human activity.
    InducedOrTriggered,
    /// A violent rock failure in a deep excavation.
    RockBurst,
    /// Seismicity associated with fluid injection.
    FluidInjection,
    /// A glacial or ice-sheet event.
    IceQuake,
    /// A volcanic eruption.
    VolcanicEruption,
    /// An event outside the named categories.
    Other,
}

impl Vocabulary for EventKind {
    const NAME: &'static str = "event kind";

    fn all() -> &'static [Self] {
        &[
            Self::Earthquake,
            Self::MineCollapse,
            Self::NuclearExplosion,
            Self::QuarryBlast,
            Self::InducedOrTriggered,
            Self::RockBurst,
            Self::FluidInjection,
            Self::IceQuake,
            Self::VolcanicEruption,
            Self::Other,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::MineCollapse => "MineCollapse",
            Self::NuclearExplosion => "NuclearExplosion",
            Self::QuarryBlast => "QuarryBlast",
            Self::InducedOrTriggered => "InducedOrTriggered",
            Self::RockBurst => "RockBurst",
            Self::FluidInjection => "FluidInjection",
            Self::IceQuake => "IceQuake",
            Self::VolcanicEruption => "VolcanicEruption",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How firmly an event classification is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Certainty {
    /// The classification is a working hypothesis.
    Suspected,
    /// The classification has been confirmed.
    Confirmed,
}

impl Vocabulary for Certainty {
    const NAME: &'static str = "certainty";

    fn all() -> &'static [Self] {
        &[Self::Suspected, Self::Confirmed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Suspected => "Suspected",
            Self::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for Certainty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The statistic a detection threshold was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdType {
    /// Median absolute deviation of the correlation trace.
    Mad,
    /// Root mean square of the correlation trace.
    Rms,
    /// A fixed absolute level.
    Absolute,
    /// The configured minimum detection level.
    Minimum,
}

impl Vocabulary for ThresholdType {
    const NAME: &'static str = "threshold type";

    fn all() -> &'static [Self] {
        &[Self::Mad, Self::Rms, Self::Absolute, Self::Minimum]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mad => "MAD",
            Self::Rms => "RMS",
            Self::Absolute => "Absolute",
            Self::Minimum => "Minimum",
        }
    }
}

impl std::fmt::Display for ThresholdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First-motion polarity of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Upward first motion.
    Up,
    /// Downward first motion.
    Down,
}

impl Vocabulary for Polarity {
    const NAME: &'static str = "polarity";

    fn all() -> &'static [Self] {
        &[Self::Up, Self::Down]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The character of a pick's onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    /// A sharp, clearly timed onset.
    Impulsive,
    /// A gradual onset.
    Emergent,
    /// An onset too unclear to characterize.
    Questionable,
}

impl Vocabulary for Onset {
    const NAME: &'static str = "onset";

    fn all() -> &'static [Self] {
        &[Self::Impulsive, Self::Emergent, Self::Questionable]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Impulsive => "impulsive",
            Self::Emergent => "emergent",
            Self::Questionable => "questionable",
        }
    }
}

impl std::fmt::Display for Onset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The agent that made a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Picker {
    /// A human analyst.
    Manual,
    /// An automatic picker.
    Automatic,
    /// A pick synthesized rather than observed.
    Contrived,
    /// Some other origin.
    Other,
}

impl Vocabulary for Picker {
    const NAME: &'static str = "picker";

    fn all() -> &'static [Self] {
        &[Self::Manual, Self::Automatic, Self::Contrived, Self::Other]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
            Self::Contrived => "contrived",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lifecycle stage a detection message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionType {
    /// First report of a new event.
    New,
    /// An update to a previously reported event.
    Update,
    /// The final solution for an event.
    Final,
    /// The event is being withdrawn.
    Retract,
}

impl Vocabulary for DetectionType {
    const NAME: &'static str = "detection type";

    fn all() -> &'static [Self] {
        &[Self::New, Self::Update, Self::Final, Self::Retract]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Update => "Update",
            Self::Final => "Final",
            Self::Retract => "Retract",
        }
    }
}

impl std::fmt::Display for DetectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind tag a message envelope carries under its top-level `Type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A single-station arrival-time pick.
    Pick,
    /// A cross-correlation detection.
    Correlation,
    /// An associated event detection.
    Detection,
    /// A retraction of a previous message.
    Retract,
    /// A station metadata record.
    StationInfo,
    /// A request for station metadata.
    StationInfoRequest,
}

impl Vocabulary for MessageKind {
    const NAME: &'static str = "message kind";

    fn all() -> &'static [Self] {
        &[
            Self::Pick,
            Self::Correlation,
            Self::Detection,
            Self::Retract,
            Self::StationInfo,
            Self::StationInfoRequest,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pick => "Pick",
            Self::Correlation => "Correlation",
            Self::Detection => "Detection",
            Self::Retract => "Retract",
            Self::StationInfo => "StationInfo",
            Self::StationInfoRequest => "StationInfoRequest",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! vocab_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = UnknownLabelError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_label(s)
                }
            }
        )+
    };
}

vocab_from_str!(
    Phase,
    EventKind,
    Certainty,
    ThresholdType,
    Polarity,
    Onset,
    Picker,
    DetectionType,
    MessageKind,
);

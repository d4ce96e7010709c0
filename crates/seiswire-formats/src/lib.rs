#![deny(missing_docs)]

//! # seiswire-formats — Seismic Detection Message Types
//!
//! The message types exchanged between waveform processors and
//! associators: picks, correlations, detections, retractions, and station
//! metadata, each an owned value object with a JSON wire form.
//!
//! Every type follows the same contract. Construction never fails and
//! never checks anything; [`JsonCodec`] moves values across the JSON
//! boundary, omitting unset fields on encode and ignoring unknown keys on
//! decode; [`Validate`](seiswire_core::Validate) answers the validity
//! question on demand, reporting every violation at once. An empty
//! sub-object is a valid "nothing to say"; an empty top-level message is
//! not.
//!
//! ```
//! use seiswire_formats::{Correlation, JsonCodec, Site, Source};
//! use seiswire_core::Validate;
//!
//! let correlation = Correlation::builder()
//!     .id("12GFH48776857")
//!     .site(Site::new("BMN", "HHZ", "OK", "01"))
//!     .source(Source::new("US", "TestAuthor"))
//!     .phase("P")
//!     .time(1408327932.9)
//!     .correlation_value(2.65)
//!     .build();
//! assert!(correlation.is_valid());
//!
//! let json = correlation.to_json().unwrap();
//! assert_eq!(Correlation::from_json(&json).unwrap(), correlation);
//! ```

pub mod association;
pub mod codec;
pub mod correlation;
pub mod detection;
pub mod event_type;
pub mod hypocenter;
pub mod message;
pub mod pick;
pub mod retract;
pub mod site;
pub mod source;
pub mod station_info;

// Re-export the full public surface at crate root.
pub use association::AssociationInfo;
pub use codec::JsonCodec;
pub use correlation::{Correlation, CorrelationBuilder};
pub use detection::{Detection, DetectionBuilder};
pub use event_type::EventType;
pub use hypocenter::Hypocenter;
pub use message::{peek_kind, Message, KIND_KEY};
pub use pick::{Pick, PickBuilder};
pub use retract::Retract;
pub use site::Site;
pub use source::Source;
pub use station_info::{StationInfo, StationInfoBuilder, StationInfoRequest};

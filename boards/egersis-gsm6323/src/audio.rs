//! Audio graph tables
//!
//! Static wiring description for the WM9713 codec: board-level
//! endpoints, the codec pins feeding them, and the two AC97 stream
//! links. The mixer component consumes this; nothing here routes
//! audio itself.

use egersis_core::config::{AudioGraph, AudioLink, AudioRoute, AudioWidget, AudioWidgetKind};

pub const WIDGETS: &[AudioWidget] = &[
    AudioWidget {
        name: "Front Speaker",
        kind: AudioWidgetKind::Speaker,
    },
    AudioWidget {
        name: "GSM Line In",
        kind: AudioWidgetKind::LineIn,
    },
];

pub const ROUTES: &[AudioRoute] = &[
    // GSM module feeds the mono mix
    AudioRoute {
        sink: "GSM Line In",
        source: "MONO",
    },
    // Front speaker hangs off SPKR and OUT3
    AudioRoute {
        sink: "Front Speaker",
        source: "SPKR",
    },
    AudioRoute {
        sink: "Front Speaker",
        source: "OUT3",
    },
];

pub const LINKS: &[AudioLink] = &[
    AudioLink {
        name: "AC97",
        stream: "AC97 HiFi",
    },
    AudioLink {
        name: "AC97 Aux",
        stream: "AC97 Aux",
    },
];

pub const GRAPH: AudioGraph = AudioGraph {
    widgets: WIDGETS,
    routes: ROUTES,
    links: LINKS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_graph_is_structurally_valid() {
        GRAPH.validate().unwrap();
    }

    #[test]
    fn test_both_stream_links_present() {
        assert_eq!(LINKS.len(), 2);
    }
}

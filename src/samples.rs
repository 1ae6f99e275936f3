//! Built-in demonstration song.
//!
//! Built on demand by [`harbor_lights_playback`]; nothing is cached, so demos
//! and tests each get their own timeline.

use std::collections::HashMap;

use crate::playback::{compose_song, PlaybackSong};
use crate::sanitize::sanitize;

const HARBOR_LIGHTS: &str = r#"Harbor Lights (demo arrangement)
Capo: none

[Verse - Palm Muted]

e|-0-------0-------3-------0-------|
B|-1-------1-------0-------1-------|
G|-0-------2-------0-------0-------|
D|-2-------2-------0-------2-------| Repeat
A|-3-------0-------2-------3-------|
E|-----------------3---------------|

   C       Am      G       C

   D D UDU D D UDU D D UDU D D UDU


The ferry horn is calling out across the bay
Gulls are circling slow above the morning tide
I count the boats that never made it home today


[Chorus]

   F       C       G       Am

   D D UDU D D UDU D D UDU D D UDU


Follow the harbor lights
Down to the water's edge


[Interlude]

e|-1-------0-------3-------0-------|
B|-1-------1-------0-------1-------|

   F       C       G       Am

   D D UDU D D UDU D D UDU D D UDU


[Verse - Palm Muted]

   C       Am      G       C

   D D UDU D D UDU D D UDU D D UDU


Salt is in the rope and in the sails we mend
And every lantern swinging marks a friend

e|-0-------0-------3-------0-------x-|
B|-1-------1-------0-------1-------x-|

   C       Am      G       C

   D D UDU D D UDU D D UDU D D UDUD


Till the last one lands


[Chorus]

   F       C       G       Am

   D D UDU D D UDU D D UDU D D UDU


Follow the harbor lights
Down to the water's edge
"#;

/// Tempo of every section without its own entry
pub const HARBOR_LIGHTS_BPM: u32 = 100;

/// The raw demonstration document.
pub fn harbor_lights_document() -> &'static str {
    HARBOR_LIGHTS
}

/// Per-section tempos used by the demonstration.
pub fn harbor_lights_tempos() -> HashMap<String, u32> {
    HashMap::from([
        ("Verse - Palm Muted".to_string(), 110),
        ("Chorus".to_string(), 110),
    ])
}

/// Build the demonstration timeline.
pub fn harbor_lights_playback() -> PlaybackSong {
    compose_song(
        "Harbor Lights",
        &sanitize(HARBOR_LIGHTS),
        &harbor_lights_tempos(),
        HARBOR_LIGHTS_BPM,
    )
}

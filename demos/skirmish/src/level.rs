//! The demo level: six rooms of a small outpost.
//!
//! Geometry is authored in the same display units a layout tool would
//! produce.  The vault door is locked; most other doors start closed and
//! are opened by the scenario script in `main.rs`.

use outpost_world::{load_level_str, WorldGraph, WorldResult};

pub const LEVEL_JSON: &str = r#"{
  "start_room": "atrium",
  "rooms": [
    { "name": "atrium",   "rect": { "left": 0,   "top": 0,   "width": 160, "height": 120 }, "camera": true },
    { "name": "barracks", "rect": { "left": 160, "top": 0,   "width": 140, "height": 120 } },
    { "name": "lab",      "rect": { "left": 0,   "top": 120, "width": 160, "height": 100 }, "first_aid": true, "terminal": true },
    { "name": "reactor",  "rect": { "left": 160, "top": 120, "width": 140, "height": 100 }, "puzzle": true },
    { "name": "armory",   "rect": { "left": 300, "top": 0,   "width": 120, "height": 220 }, "ammo": true },
    { "name": "vault",    "rect": { "left": 420, "top": 0,   "width": 100, "height": 220 }, "camera": true }
  ],
  "connections": [
    { "name": "atrium-barracks", "door": true, "open": true,
      "rooms": ["atrium", "barracks"], "center": { "x": 160, "y": 60 } },
    { "name": "atrium-lab", "door": true,
      "rooms": ["atrium", "lab"], "center": { "x": 80, "y": 120 } },
    { "name": "barracks-reactor", "door": true, "open": true,
      "rooms": ["barracks", "reactor"], "center": { "x": 230, "y": 120 } },
    { "name": "lab-reactor", "door": true,
      "rooms": ["lab", "reactor"], "center": { "x": 160, "y": 170 } },
    { "name": "barracks-armory", "door": true,
      "rooms": ["barracks", "armory"], "center": { "x": 300, "y": 60 } },
    { "name": "reactor-armory", "door": true,
      "rooms": ["reactor", "armory"], "center": { "x": 300, "y": 170 } },
    { "name": "armory-vault", "door": true, "locked": true,
      "rooms": ["armory", "vault"], "center": { "x": 420, "y": 110 } }
  ]
}"#;

pub fn load() -> WorldResult<WorldGraph> {
    load_level_str(LEVEL_JSON)
}

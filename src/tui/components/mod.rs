//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top bar with the key help line
//! - `PadCell`: One trigger surface (key, flash highlight, power dim)
//!
//! ### Stateful Components (Geometry-Caching)
//!
//! Components that persist hit-test geometry between frames:
//! - `PadBoard`: The 3×3 pad grid; caches one rect per pad
//! - `ControlPanel`: Power button, volume gauge, readout; caches the
//!   button and gauge rects
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally: `PadBoard` renders nine `PadCell`s. This
//! mirrors React's component model.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. The machine state lives in the root;
//! updated values flow down on every frame, and user intent flows back up
//! as actions resolved by the run loop. No component talks to a sibling.
//!
//! ### Centralized Input
//!
//! Components do not consume events. Keyboard characters go through the
//! kit's single dispatcher, and mouse clicks are hit-tested against the
//! rects the stateful components cached during the last draw.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top help/status line)
//! ├── pad.rs            (Single pad surface)
//! ├── pad_board.rs      (3×3 pad grid)
//! └── control_panel.rs  (Power, volume, readout)
//! ```

pub mod control_panel;
pub mod pad;
pub mod pad_board;
pub mod title_bar;

pub use control_panel::{ControlPanel, ControlPanelState, PanelHit};
pub use pad_board::{PadBoard, PadBoardState};
pub use title_bar::TitleBar;

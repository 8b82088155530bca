// Copyright (c) 2023, 2024 the z80-core developers
//
// Permission to use, copy, modify, and distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
// ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
// OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
//

//! A cycle-accurate software implementation of the Zilog Z80.
//!
//! The crate models the processor down to the machine cycle: the full
//! opcode map with all four prefix schemes, the undocumented X/Y flag
//! bits and WZ (MEMPTR) latch, T-state-exact instruction timing with
//! host-insertable wait cycles, and the three maskable interrupt modes
//! plus NMI.  The host supplies the surroundings: a segment-built memory
//! map, callbacks behind the 256 I/O ports, a tick source (free-running,
//! deterministic-pattern, or wall-clock paced), and whatever debug hooks
//! it cares to install.

pub mod bits;
pub mod bus;
pub mod clock;
pub mod errors;
pub mod memory;
pub mod ports;
pub mod timing;
pub mod z80;

pub use crate::bus::{Bus, InterruptLines};
pub use crate::clock::{Clock, FastClock, PatternClock, RealTimeClock};
pub use crate::errors::{CoreError, Result};
pub use crate::memory::{MemoryBank, MemoryMap, MemorySegment};
pub use crate::ports::{PortBank, PortHooks};
pub use crate::z80::cpu::{CpuOptions, InterruptMode, State, CPU};

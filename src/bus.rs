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

// Everything the CPU reaches over its pins: the memory bank, the I/O
// ports, the interrupt request lines, and the byte source a peripheral
// drives onto the data bus during mode 0 and mode 2 acknowledge cycles.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::memory::MemoryBank;
use crate::ports::PortBank;

// The /INT and /NMI lines.  Peripherals (on any thread) assert them; the
// engine samples and clears them at instruction boundaries.  Each is a
// single-producer latch, so relaxed ordering is all that's needed.
pub struct InterruptLines {
    int: AtomicBool,
    nmi: AtomicBool,
}

impl InterruptLines {
    fn new() -> InterruptLines {
        InterruptLines {
            int: AtomicBool::new(false),
            nmi: AtomicBool::new(false),
        }
    }

    pub fn raise_int(&self) {
        self.int.store(true, Ordering::Relaxed);
    }

    pub fn raise_nmi(&self) {
        self.nmi.store(true, Ordering::Relaxed);
    }

    pub fn int_pending(&self) -> bool {
        self.int.load(Ordering::Relaxed)
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi.load(Ordering::Relaxed)
    }

    pub(crate) fn take_int(&self) -> bool {
        self.int.swap(false, Ordering::Relaxed)
    }

    pub(crate) fn take_nmi(&self) -> bool {
        self.nmi.swap(false, Ordering::Relaxed)
    }
}

// What an interrupting peripheral would place on the data bus, one byte
// per call.  Required for mode 0 (an instruction) and mode 2 (the low
// vector byte).
pub type DataBusCallback = Box<dyn FnMut() -> u8 + Send>;

pub struct Bus {
    pub mem:    MemoryBank,
    pub ports:  PortBank,
    lines:      Arc<InterruptLines>,
    int_data:   Option<DataBusCallback>,
}

impl Bus {
    pub fn new(mem: MemoryBank) -> Bus {
        Bus {
            mem,
            ports: PortBank::new(),
            lines: Arc::new(InterruptLines::new()),
            int_data: None,
        }
    }

    // A handle peripherals keep to assert interrupts with.
    pub fn interrupt_lines(&self) -> Arc<InterruptLines> {
        self.lines.clone()
    }

    pub(crate) fn lines(&self) -> &InterruptLines {
        &self.lines
    }

    pub fn set_int_data_callback(&mut self, callback: Option<DataBusCallback>) {
        self.int_data = callback;
    }

    pub(crate) fn has_int_data_callback(&self) -> bool {
        self.int_data.is_some()
    }

    pub(crate) fn int_data_byte(&mut self) -> Option<u8> {
        self.int_data.as_mut().map(|callback| callback())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBank;

    #[test]
    fn interrupt_lines_latch_until_taken() {
        let bus = Bus::new(MemoryBank::new());
        let lines = bus.interrupt_lines();

        assert!(!lines.int_pending());
        lines.raise_int();
        lines.raise_nmi();
        assert!(lines.int_pending());
        assert!(lines.nmi_pending());

        assert!(bus.lines().take_int());
        assert!(!bus.lines().take_int());
        assert!(bus.lines().take_nmi());
        assert!(!lines.nmi_pending());
    }

    #[test]
    fn data_bus_callback_feeds_bytes() {
        let mut bus = Bus::new(MemoryBank::new());
        assert!(!bus.has_int_data_callback());
        assert_eq!(bus.int_data_byte(), None);

        let mut next = 0x40u8;
        bus.set_int_data_callback(Some(Box::new(move || {
            next = next.wrapping_add(1);
            next
        })));
        assert!(bus.has_int_data_callback());
        assert_eq!(bus.int_data_byte(), Some(0x41));
        assert_eq!(bus.int_data_byte(), Some(0x42));
    }
}

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

// The 256 I/O ports of the Z80, each a set of host-installed callbacks.
//
// The Z80 puts a full 16-bit address on the bus during I/O (the B register
// rides in the high byte for the in r,(c) family), but devices are selected
// by the low byte, so that's what the hooks receive.

use log::warn;

pub type ReadHook = Box<dyn FnMut(u8) -> u8 + Send>;
pub type WriteHook = Box<dyn FnMut(u8, u8) + Send>;
pub type SignalHook = Box<dyn FnMut(u8) + Send>;

// What the host wires up to a single port.  Any subset may be present;
// signal hooks fire before the data hook of the same direction.
#[derive(Default)]
pub struct PortHooks {
    pub read:          Option<ReadHook>,
    pub write:         Option<WriteHook>,
    pub signal_read:   Option<SignalHook>,
    pub signal_write:  Option<SignalHook>,
}

impl PortHooks {
    pub fn new() -> PortHooks {
        PortHooks::default()
    }

    pub fn with_read(mut self, hook: ReadHook) -> PortHooks {
        self.read = Some(hook);
        self
    }

    pub fn with_write(mut self, hook: WriteHook) -> PortHooks {
        self.write = Some(hook);
        self
    }

    pub fn with_signal_read(mut self, hook: SignalHook) -> PortHooks {
        self.signal_read = Some(hook);
        self
    }

    pub fn with_signal_write(mut self, hook: SignalHook) -> PortHooks {
        self.signal_write = Some(hook);
        self
    }
}

pub struct PortBank {
    ports: Vec<PortHooks>,
}

impl PortBank {
    pub fn new() -> PortBank {
        let mut ports = Vec::with_capacity(256);
        for _ in 0..256 {
            ports.push(PortHooks::new());
        }
        PortBank {
            ports,
        }
    }

    pub fn install(&mut self, port: u8, hooks: PortHooks) {
        self.ports[port as usize] = hooks;
    }

    pub fn remove(&mut self, port: u8) -> PortHooks {
        std::mem::replace(&mut self.ports[port as usize], PortHooks::new())
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        let port = (addr & 0x00FF) as u8;
        let hooks = &mut self.ports[port as usize];

        if let Some(signal) = hooks.signal_read.as_mut() {
            signal(port);
        }
        match hooks.read.as_mut() {
            Some(read) => read(port),
            None => {
                warn!("Read from port 0x{:02X}, which has no device connected.", port);

                // An undriven data bus floats high.
                0xFF
            },
        }
    }

    pub fn write_byte(&mut self, addr: u16, val: u8) {
        let port = (addr & 0x00FF) as u8;
        let hooks = &mut self.ports[port as usize];

        if let Some(signal) = hooks.signal_write.as_mut() {
            signal(port);
        }
        match hooks.write.as_mut() {
            Some(write) => write(port, val),
            None => {
                warn!("Dropped write of 0x{:02X} to port 0x{:02X}, which has no device connected.", val, port);
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn disconnected_ports_float_high_and_drop_writes() {
        let mut bank = PortBank::new();
        assert_eq!(bank.read_byte(0x00FE), 0xFF);
        bank.write_byte(0x00FE, 0x42);
    }

    #[test]
    fn hooks_receive_the_low_address_byte() {
        let mut bank = PortBank::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_in_hook = seen.clone();
        bank.install(0x7F, PortHooks::new().with_read(Box::new(move |port| {
            seen_in_hook.lock().unwrap().push(port);
            0x5A
        })));

        // B=0x12 in the high byte must not change the selected port.
        assert_eq!(bank.read_byte(0x127F), 0x5A);
        assert_eq!(seen.lock().unwrap().as_slice(), &[0x7F]);
    }

    #[test]
    fn signal_hooks_fire_before_data_hooks() {
        let mut bank = PortBank::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_signal = order.clone();
        let order_write = order.clone();
        bank.install(0x10, PortHooks::new()
            .with_signal_write(Box::new(move |_| order_signal.lock().unwrap().push("signal")))
            .with_write(Box::new(move |_, _| order_write.lock().unwrap().push("write"))));

        bank.write_byte(0x0010, 0xAA);
        assert_eq!(order.lock().unwrap().as_slice(), &["signal", "write"]);
    }

    #[test]
    fn removing_a_port_disconnects_it() {
        let mut bank = PortBank::new();
        bank.install(0x01, PortHooks::new().with_read(Box::new(|_| 0x11)));
        assert_eq!(bank.read_byte(0x0001), 0x11);

        bank.remove(0x01);
        assert_eq!(bank.read_byte(0x0001), 0xFF);
    }
}

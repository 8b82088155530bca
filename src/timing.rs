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

// The machine-cycle timer.  A machine cycle is a named group of T-states
// performing one bus activity; this module turns each into the right
// number of clock ticks, stretches accesses by whatever wait cycles the
// host has requested, and tells an observer about every cycle as it
// completes.
//
// T-state counts per cycle:
//
//   opcode fetch       4    address, data, then refresh on the bus
//   memory read        3
//   memory write       3
//   port read          4    one wait state inserted by the CPU itself
//   port write         4
//   int ack, NMI       5
//   int ack, mode 0    6
//   int ack, mode 1/2  7
//   internal           N    supplied by the instruction
//
// Host-requested wait cycles are drained at the slot where /WAIT is
// sampled: after the address and data phases of reads and fetches, and
// after the first two T-states of writes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::warn;

use crate::clock::Clock;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CycleKind {
    OpcodeFetch,
    Refresh,
    MemoryRead,
    MemoryWrite,
    PortRead,
    PortWrite,
    IntAckNmi,
    IntAckIm0,
    IntAckVectored,
    InternalOp,
}

// Called with the cycle (or, for an opcode fetch, the phase) just
// completed, the address that was on the bus for it, and the T-state
// count at that point.
pub type CycleObserver = Box<dyn FnMut(CycleKind, u16, u64) + Send>;
pub type WaitObserver = Box<dyn FnMut(u32) + Send>;

pub struct CycleTimer {
    clock:          Box<dyn Clock + Send>,
    pending_waits:  Arc<AtomicU32>,
    observer:       Option<CycleObserver>,
    wait_observer:  Option<WaitObserver>,
    inst_t:         u32,
    inst_wait_t:    u32,
}

impl CycleTimer {
    pub fn new(clock: Box<dyn Clock + Send>) -> CycleTimer {
        CycleTimer {
            clock,
            pending_waits: Arc::new(AtomicU32::new(0)),
            observer: None,
            wait_observer: None,
            inst_t: 0,
            inst_wait_t: 0,
        }
    }

    // The latch through which the host stretches accesses.  Writes are
    // picked up at the next wait-sampling slot.
    pub fn wait_handle(&self) -> Arc<AtomicU32> {
        self.pending_waits.clone()
    }

    pub fn set_observer(&mut self, observer: Option<CycleObserver>) {
        self.observer = observer;
    }

    pub fn set_wait_observer(&mut self, observer: Option<WaitObserver>) {
        self.wait_observer = observer;
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    // Monotonic T-state count; nothing here ever rewinds it.
    pub fn total_t(&self) -> u64 {
        self.clock.t_states()
    }

    pub fn begin_instruction(&mut self) {
        self.inst_t = 0;
        self.inst_wait_t = 0;
    }

    // T-states spent since begin_instruction().
    pub fn instruction_t(&self) -> u32 {
        self.inst_t
    }

    fn tick(&mut self, count: u32) {
        self.clock.tick_many(count);
        self.inst_t += count;
    }

    fn drain_waits(&mut self) {
        let count = self.pending_waits.swap(0, Ordering::Relaxed);
        if count > 0 {
            if let Some(observer) = self.wait_observer.as_mut() {
                observer(count);
            }
            self.tick(count);
            self.inst_wait_t += count;
        }
    }

    fn completed(&mut self, kind: CycleKind, addr: u16) {
        let total = self.total_t();
        if let Some(observer) = self.observer.as_mut() {
            observer(kind, addr, total);
        }
    }

    // An opcode fetch: PC on the address bus and the opcode on the data
    // bus for the first two T-states, then I and R driven out for the
    // refresh phase.  The observer hears both addresses.
    pub fn opcode_fetch(&mut self, pc: u16, refresh_addr: u16) {
        self.tick(2);
        self.drain_waits();
        self.completed(CycleKind::OpcodeFetch, pc);
        self.tick(2);
        self.completed(CycleKind::Refresh, refresh_addr);
    }

    pub fn memory_read(&mut self, addr: u16) {
        self.tick(2);
        self.drain_waits();
        self.tick(1);
        self.completed(CycleKind::MemoryRead, addr);
    }

    pub fn memory_write(&mut self, addr: u16) {
        self.tick(2);
        self.drain_waits();
        self.tick(1);
        self.completed(CycleKind::MemoryWrite, addr);
    }

    pub fn port_read(&mut self, addr: u16) {
        self.tick(2);
        self.drain_waits();
        self.tick(2);
        self.completed(CycleKind::PortRead, addr);
    }

    pub fn port_write(&mut self, addr: u16) {
        self.tick(2);
        self.drain_waits();
        self.tick(2);
        self.completed(CycleKind::PortWrite, addr);
    }

    pub fn int_ack_nmi(&mut self) {
        self.tick(2);
        self.drain_waits();
        self.tick(3);
        self.completed(CycleKind::IntAckNmi, 0);
    }

    pub fn int_ack_im0(&mut self) {
        self.tick(2);
        self.drain_waits();
        self.tick(4);
        self.completed(CycleKind::IntAckIm0, 0);
    }

    pub fn int_ack_vectored(&mut self) {
        self.tick(2);
        self.drain_waits();
        self.tick(5);
        self.completed(CycleKind::IntAckVectored, 0);
    }

    pub fn internal(&mut self, t_states: u32) {
        if t_states == 0 {
            return;
        }
        self.tick(t_states);
        self.completed(CycleKind::InternalOp, 0);
    }

    // Bring the instruction in progress up to its documented total, plus
    // whatever wait cycles the host had inserted along the way.  The
    // shortfall is the instruction's internal operation time; an overrun
    // means a microcode emitted bus traffic it shouldn't have.
    pub fn top_up_instruction(&mut self, documented_total: u32) {
        let expected = documented_total + self.inst_wait_t;
        let spent = self.inst_t;
        if expected > spent {
            self.internal(expected - spent);
        } else if spent > expected {
            warn!("An instruction spent {} T-states where {} were documented.", spent, expected);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FastClock, DEFAULT_HZ};
    use std::sync::Mutex;

    fn test_timer() -> CycleTimer {
        CycleTimer::new(Box::new(FastClock::new(DEFAULT_HZ)))
    }

    #[test]
    fn cycle_lengths_match_the_documentation() {
        let mut timer = test_timer();

        timer.opcode_fetch(0x0000, 0x0000);
        assert_eq!(timer.total_t(), 4);
        timer.memory_read(0x1234);
        assert_eq!(timer.total_t(), 7);
        timer.memory_write(0x1234);
        assert_eq!(timer.total_t(), 10);
        timer.port_read(0x00FE);
        assert_eq!(timer.total_t(), 14);
        timer.port_write(0x00FE);
        assert_eq!(timer.total_t(), 18);
        timer.int_ack_nmi();
        assert_eq!(timer.total_t(), 23);
        timer.int_ack_im0();
        assert_eq!(timer.total_t(), 29);
        timer.int_ack_vectored();
        assert_eq!(timer.total_t(), 36);
        timer.internal(5);
        assert_eq!(timer.total_t(), 41);
    }

    #[test]
    fn wait_cycles_stretch_the_access() {
        let mut timer = test_timer();
        let waits = timer.wait_handle();

        waits.store(3, Ordering::Relaxed);
        timer.memory_read(0x0000);
        assert_eq!(timer.total_t(), 6);

        // The latch is consumed by the first access.
        timer.memory_read(0x0000);
        assert_eq!(timer.total_t(), 9);
    }

    #[test]
    fn wait_observer_sees_the_inserted_count() {
        let mut timer = test_timer();
        let waits = timer.wait_handle();
        let seen = Arc::new(Mutex::new(0u32));

        let seen_in_hook = seen.clone();
        timer.set_wait_observer(Some(Box::new(move |count| {
            *seen_in_hook.lock().unwrap() += count;
        })));

        waits.store(2, Ordering::Relaxed);
        timer.opcode_fetch(0x0000, 0x0000);
        assert_eq!(*seen.lock().unwrap(), 2);
        assert_eq!(timer.total_t(), 6);
    }

    #[test]
    fn instruction_tally_and_top_up() {
        let mut timer = test_timer();

        timer.begin_instruction();
        timer.opcode_fetch(0x0000, 0x0000);
        timer.memory_read(0x0001);
        assert_eq!(timer.instruction_t(), 7);

        // An 11 T-state instruction that emitted 7 T of bus traffic.
        timer.top_up_instruction(11);
        assert_eq!(timer.instruction_t(), 11);
        assert_eq!(timer.total_t(), 11);

        // Topping up to a smaller count must not rewind anything.
        timer.top_up_instruction(4);
        assert_eq!(timer.total_t(), 11);
    }

    #[test]
    fn observer_sees_cycles_in_order() {
        let mut timer = test_timer();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_in_hook = log.clone();
        timer.set_observer(Some(Box::new(move |kind, addr, total| {
            log_in_hook.lock().unwrap().push((kind, addr, total));
        })));

        timer.opcode_fetch(0x0100, 0x1F7F);
        timer.memory_read(0x0101);

        // The fetch reports its data phase at PC and its refresh phase
        // at the I/R address.
        let log = log.lock().unwrap();
        assert_eq!(log.as_slice(), &[
            (CycleKind::OpcodeFetch, 0x0100, 2),
            (CycleKind::Refresh, 0x1F7F, 4),
            (CycleKind::MemoryRead, 0x0101, 7),
        ]);
    }
}

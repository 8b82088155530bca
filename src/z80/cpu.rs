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

// The instruction-cycle engine.  This is a software implementation of the
// Zilog Z80: one step() is one instruction - prefetch, decode, fetch and
// operand timing, PC advance, microcode, timing top-up, then the
// non-maskable and maskable interrupt checks at the boundary.
//
// A halted CPU keeps executing synthetic NOPs so the clock and the
// refresh counter behave as they do on silicon, until an interrupt (or
// the end_on_halt option) gets it out of there.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use log::{info, warn};

use crate::bits;
use crate::bus;
use crate::clock::Clock;
use crate::errors::{CoreError, Result};
use crate::timing::CycleTimer;
use crate::z80::instructions::{self, Args, Instruction, Prefix};
use crate::z80::registers::Regs;

// Interrupt modes:
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterruptMode {
    Mode0,
    Mode1,
    Mode2,
    ModeUndefined,
}

// Constants:
pub const RESET_EXEC_START:  u16 = 0x0000;
pub const NMI_VEC:           u16 = 0x0066;
pub const MODE1_INT_VEC:     u16 = 0x0038;
pub const DEFAULT_STACK_TOP: u16 = 0xFFFF;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Stopped,
    Running,
    Halted,
}

// Host-tunable knobs.  The stack top is where SP lands on reset, which
// the silicon leaves at the top of memory.
#[derive(Copy, Clone, Debug)]
pub struct CpuOptions {
    pub stack_top:    u16,
    pub end_on_halt:  bool,
}

impl Default for CpuOptions {
    fn default() -> CpuOptions {
        CpuOptions {
            stack_top: DEFAULT_STACK_TOP,
            end_on_halt: false,
        }
    }
}

pub type ExecuteHook = Box<dyn FnMut(u16, &'static Instruction) + Send>;
pub type AfterExecuteHook = Box<dyn FnMut(u16, u32) + Send>;
pub type EventHook = Box<dyn FnMut() + Send>;
pub type BreakpointHook = Box<dyn FnMut(u16) + Send>;

// Debug hooks the host may install; unset ones cost nothing.
#[derive(Default)]
pub struct Hooks {
    pub before_execute:  Option<ExecuteHook>,
    pub after_execute:   Option<AfterExecuteHook>,
    pub on_halt:         Option<EventHook>,
    pub on_stop:         Option<EventHook>,
    pub on_breakpoint:   Option<BreakpointHook>,
}

pub struct CPU {
    pub regs:     Regs,
    pub state:    State,
    pub im:       InterruptMode,
    pub iff1:     bool,
    pub iff2:     bool,
    pub options:  CpuOptions,
    pub timer:    CycleTimer,
    pub hooks:    Hooks,

    // ei holds maskable interrupts off until the end of the following
    // instruction; this latch carries that one-instruction grace.
    pub ei_deferred: bool,

    // The package of the instruction being executed: its own address,
    // its operand bytes, and the taken-branch T-state surcharge its
    // microcode reports.
    pub inst_pc:  u16,
    pub args:     Args,
    pub extra_t:  u32,

    breakpoints:  HashSet<u16>,
    running:      Arc<AtomicBool>,
    suspended:    Arc<AtomicBool>,
}

impl CPU {
    pub fn new(clock: Box<dyn Clock + Send>, options: CpuOptions) -> CPU {
        let mut regs = Regs::new();
        regs.clear(options.stack_top);

        let cpu = CPU {
            regs,
            state: State::Stopped,
            im: InterruptMode::Mode0,
            iff1: false,
            iff2: false,
            options,
            timer: CycleTimer::new(clock),
            hooks: Hooks::default(),
            ei_deferred: false,
            inst_pc: 0,
            args: Args::none(),
            extra_t: 0,
            breakpoints: HashSet::new(),
            running: Arc::new(AtomicBool::new(false)),
            suspended: Arc::new(AtomicBool::new(false)),
        };

        info!("Created an emulated Z80 CPU.");
        cpu
    }

    // Put the CPU into the post-reset state: registers cleared, SP at the
    // configured stack top, mode 0, interrupts off, writable memory wiped.
    pub fn reset(&mut self, bus: &mut bus::Bus) {
        if let Ok(map) = bus.mem.map_mut() {
            map.clear_all_writable();
        }

        self.regs.clear(self.options.stack_top);
        self.regs.pc = RESET_EXEC_START;
        self.im = InterruptMode::Mode0;
        self.iff1 = false;
        self.iff2 = false;
        self.ei_deferred = false;
        self.extra_t = 0;

        if self.state == State::Halted {
            self.state = State::Running;
        }

        info!("The CPU was reset.");
    }

    pub fn start(&mut self) {
        self.running.store(true, Ordering::Relaxed);
        if self.state == State::Stopped {
            self.state = State::Running;
        }
    }

    // Request a stop; the engine honors it at the next instruction
    // boundary.  Usable from any thread through stop_handle().
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    // Park the CPU the way a halt instruction would; an interrupt (or
    // reset) brings it back.
    pub fn halt(&mut self) {
        self.enter_halt();
    }

    // While suspended, run_until_stopped() parks between instructions so
    // the host may poke at registers and memory from outside.
    pub fn suspend(&self) {
        self.suspended.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.suspended.store(false, Ordering::Relaxed);
    }

    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.insert(addr);
    }

    pub fn remove_breakpoint(&mut self, addr: u16) {
        self.breakpoints.remove(&addr);
    }

    // The latch through which the host inserts wait cycles.
    pub fn wait_cycle_handle(&self) -> Arc<AtomicU32> {
        self.timer.wait_handle()
    }

    // I and R as they appear on the address bus during refresh.
    fn refresh_addr(&self) -> u16 {
        bits::compose_word(self.regs.i, self.regs.r)
    }

    fn enter_stop(&mut self) {
        if self.state != State::Stopped {
            self.state = State::Stopped;
            self.running.store(false, Ordering::Relaxed);
            info!("The CPU stopped.");
            if let Some(hook) = self.hooks.on_stop.as_mut() {
                hook();
            }
        }
    }

    pub(crate) fn enter_halt(&mut self) {
        if self.state != State::Halted {
            self.state = State::Halted;
            info!("The CPU is halted, waiting for an interrupt.");
            if let Some(hook) = self.hooks.on_halt.as_mut() {
                hook();
            }
        }
    }

    // The timed accessors the executing instruction stream uses: each
    // runs the machine-cycle timer for the bus activity and then moves
    // the data.

    pub(crate) fn timed_read_byte(&mut self, bus: &mut bus::Bus, addr: u16) -> u8 {
        self.timer.memory_read(addr);
        bus.mem.read_byte_raw(addr)
    }

    pub(crate) fn timed_write_byte(&mut self, bus: &mut bus::Bus, addr: u16, val: u8) {
        self.timer.memory_write(addr);
        bus.mem.write_byte_raw(addr, val);
    }

    pub(crate) fn timed_read_word(&mut self, bus: &mut bus::Bus, addr: u16) -> u16 {
        let lsb = self.timed_read_byte(bus, addr);
        let msb = self.timed_read_byte(bus, addr.wrapping_add(1));

        bits::compose_word(msb, lsb)
    }

    pub(crate) fn timed_write_word(&mut self, bus: &mut bus::Bus, addr: u16, val: u16) {
        self.timed_write_byte(bus, addr, bits::low_byte(val));
        self.timed_write_byte(bus, addr.wrapping_add(1), bits::high_byte(val));
    }

    pub(crate) fn timed_port_read(&mut self, bus: &mut bus::Bus, addr: u16) -> u8 {
        self.timer.port_read(addr);
        bus.ports.read_byte(addr)
    }

    pub(crate) fn timed_port_write(&mut self, bus: &mut bus::Bus, addr: u16, val: u8) {
        self.timer.port_write(addr);
        bus.ports.write_byte(addr, val);
    }

    // Stack discipline: pushes store the high byte first, pops read the
    // low byte first.
    pub(crate) fn push_word(&mut self, bus: &mut bus::Bus, val: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        let sp = self.regs.sp;
        self.timed_write_byte(bus, sp, bits::high_byte(val));

        self.regs.sp = self.regs.sp.wrapping_sub(1);
        let sp = self.regs.sp;
        self.timed_write_byte(bus, sp, bits::low_byte(val));
    }

    pub(crate) fn pop_word(&mut self, bus: &mut bus::Bus) -> u16 {
        let sp = self.regs.sp;
        let lsb = self.timed_read_byte(bus, sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);

        let sp = self.regs.sp;
        let msb = self.timed_read_byte(bus, sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);

        bits::compose_word(msb, lsb)
    }

    // Execute a single instruction (or a halted NOP), service any
    // pending interrupt at the boundary, and return the number of
    // T-states that passed.
    pub fn step(&mut self, bus: &mut bus::Bus) -> Result<u32> {
        if self.state == State::Stopped {
            return Ok(0);
        }
        if !bus.mem.is_bound() {
            return Err(CoreError::MemoryNotInitialised);
        }
        if !self.running.load(Ordering::Relaxed) {
            self.enter_stop();
            return Ok(0);
        }

        let t_before = self.timer.total_t();
        self.timer.begin_instruction();
        self.extra_t = 0;

        if self.state == State::Halted {
            if self.options.end_on_halt {
                self.enter_stop();
                return Ok(0);
            }

            // Halted: burn a NOP's worth of fetch so timing and memory
            // refresh carry on.  PC already points past the halt.
            self.regs.refresh_r();
            let refresh = self.refresh_addr();
            self.timer.opcode_fetch(self.regs.pc, refresh);
        } else {
            let (bytes, available) = bus.mem.prefetch(self.regs.pc);
            let decoded = instructions::decode(bytes);
            let inst = decoded.inst;

            if (inst.size as usize) > available {
                warn!("Instruction at 0x{:04X} runs past the end of the address space; stopping.", self.regs.pc);
                self.enter_stop();
                return Ok((self.timer.total_t() - t_before) as u32);
            }

            self.inst_pc = self.regs.pc;
            self.args = decoded.args;

            if self.breakpoints.contains(&self.inst_pc) {
                let addr = self.inst_pc;
                if let Some(hook) = self.hooks.on_breakpoint.as_mut() {
                    hook(addr);
                }
            }
            let addr = self.inst_pc;
            if let Some(hook) = self.hooks.before_execute.as_mut() {
                hook(addr, inst);
            }

            // One fetch cycle (with refresh) per prefix/opcode byte, one
            // memory-read cycle per operand byte.
            let fetched = decoded.prefix.fetched_bytes();
            for index in 0..fetched {
                self.regs.refresh_r();
                let refresh = self.refresh_addr();
                self.timer.opcode_fetch(self.inst_pc.wrapping_add(index), refresh);
            }
            for index in fetched..inst.size {
                self.timer.memory_read(self.inst_pc.wrapping_add(index));
            }

            self.regs.pc = self.inst_pc.wrapping_add(inst.size);

            // The doubly prefixed forms compute their effective address
            // while the displacement byte is on the bus; microcode finds
            // it in WZ.
            match decoded.prefix {
                Prefix::DdCb => {
                    self.regs.wz = bits::displace(self.regs.ix, self.args.displacement());
                },
                Prefix::FdCb => {
                    self.regs.wz = bits::displace(self.regs.iy, self.args.displacement());
                },
                _ => {},
            }

            (inst.execute)(self, bus);

            self.timer.top_up_instruction(inst.clock_cycles + self.extra_t);

            let spent = self.timer.instruction_t();
            if let Some(hook) = self.hooks.after_execute.as_mut() {
                hook(addr, spent);
            }
        }

        // Interrupts are sampled once per instruction boundary.  NMI wins
        // over INT, and INT additionally waits out the ei grace period.
        if bus.lines().take_nmi() {
            self.acknowledge_nmi(bus);
        } else if bus.lines().int_pending() && self.iff1 && !self.ei_deferred {
            bus.lines().take_int();
            self.acknowledge_int(bus)?;
        }
        self.ei_deferred = false;

        Ok((self.timer.total_t() - t_before) as u32)
    }

    // Run until something stops the engine: a stop request, end_on_halt,
    // or a decode underrun.
    pub fn run_until_stopped(&mut self, bus: &mut bus::Bus) -> Result<()> {
        self.start();

        while self.state != State::Stopped {
            while self.suspended.load(Ordering::Relaxed) {
                std::hint::spin_loop();
            }
            self.step(bus)?;
        }
        Ok(())
    }

    fn acknowledge_nmi(&mut self, bus: &mut bus::Bus) {
        if self.state == State::Halted {
            self.state = State::Running;
        }

        // IFF2 keeps the pre-interrupt enable state for retn to restore.
        self.iff1 = false;

        self.timer.begin_instruction();
        self.timer.int_ack_nmi();

        let return_addr = self.regs.pc;
        self.push_word(bus, return_addr);
        self.regs.pc = NMI_VEC;
        self.regs.wz = NMI_VEC;
    }

    fn acknowledge_int(&mut self, bus: &mut bus::Bus) -> Result<()> {
        if self.state == State::Halted {
            self.state = State::Running;
        }

        self.iff1 = false;
        self.iff2 = false;

        match self.im {
            InterruptMode::Mode0 => {
                if !bus.has_int_data_callback() {
                    return Err(CoreError::InterruptMisconfigured { mode: 0 });
                }

                self.timer.begin_instruction();
                self.timer.int_ack_im0();

                // The peripheral feeds an instruction over the data bus;
                // it goes through the ordinary decoder.  PC stays where
                // it was unless the injected instruction itself moves it,
                // so an injected call or rst returns to the interrupted
                // spot.
                let mut bytes = [0x00; 4];
                for slot in bytes.iter_mut() {
                    *slot = bus.int_data_byte().unwrap_or(0x00);
                }
                let decoded = instructions::decode(bytes);

                self.inst_pc = self.regs.pc;
                self.args = decoded.args;
                self.extra_t = 0;

                (decoded.inst.execute)(self, bus);

                // Per the Z80 Family CPU User Manual, the response adds
                // two wait states to the injected instruction's time.
                self.timer.top_up_instruction(decoded.inst.clock_cycles + self.extra_t + 2);
            },
            InterruptMode::Mode1 => {
                self.timer.begin_instruction();
                self.timer.int_ack_vectored();

                let return_addr = self.regs.pc;
                self.push_word(bus, return_addr);
                self.regs.pc = MODE1_INT_VEC;
                self.regs.wz = MODE1_INT_VEC;
            },
            InterruptMode::Mode2 => {
                if !bus.has_int_data_callback() {
                    return Err(CoreError::InterruptMisconfigured { mode: 2 });
                }

                self.timer.begin_instruction();
                self.timer.int_ack_vectored();

                let vector = bus.int_data_byte().unwrap_or(0xFF);
                let return_addr = self.regs.pc;
                self.push_word(bus, return_addr);

                let table_addr = bits::compose_word(self.regs.i, vector);
                let target = self.timed_read_word(bus, table_addr);
                self.regs.pc = target;
                self.regs.wz = target;
            },
            InterruptMode::ModeUndefined => {
                warn!("Servicing interrupts in the 0/1 mode is not supported.");
                self.timer.internal(4);
            },
        }
        Ok(())
    }
}

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

//! Program-level tests of the instruction-cycle engine: tiny machine-code
//! programs are loaded through the untimed memory API, stepped, and the
//! register file, flags, memory, ports and T-state counts are checked
//! against the documented (and undocumented) Z80 behavior.

use std::sync::{Arc, Mutex};
use std::sync::atomic::Ordering;

use crate::bus::Bus;
use crate::clock::{FastClock, DEFAULT_HZ};
use crate::errors::CoreError;
use crate::memory::{MemoryBank, MemoryMap, MemorySegment};
use crate::ports::PortHooks;
use crate::z80::cpu::{CpuOptions, InterruptMode, State, CPU};
use crate::z80::instructions;

fn test_cpu_with_options(options: CpuOptions) -> CPU {
    let mut cpu = CPU::new(Box::new(FastClock::new(DEFAULT_HZ)), options);
    cpu.start();
    cpu
}

fn ram_bus() -> Bus {
    let mut map = MemoryMap::new();
    map.add_segment(MemorySegment::ram("test ram".to_owned(), 0x0000, 0x10000));

    Bus::new(MemoryBank::with_map(map))
}

fn cpu_with_program(program: &[u8]) -> (CPU, Bus) {
    let mut bus = ram_bus();
    bus.mem.load_from_buffer(0x0000, program, "test program").unwrap();

    (test_cpu_with_options(CpuOptions::default()), bus)
}

// Step the CPU the given number of times and add up the T-states.
fn run_steps(cpu: &mut CPU, bus: &mut Bus, count: usize) -> u32 {
    let mut total = 0;
    for _ in 0..count {
        total += cpu.step(bus).unwrap();
    }
    total
}

#[test]
fn reset_state() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00]);
    cpu.regs.a = 0x12;
    cpu.regs.hl = 0x3456;
    cpu.regs.pc = 0x2000;
    cpu.iff1 = true;
    cpu.iff2 = true;
    cpu.im = InterruptMode::Mode2;

    cpu.reset(&mut bus);

    assert_eq!(cpu.regs.sp, 0xFFFF);
    assert_eq!(cpu.regs.pc, 0x0000);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.hl, 0x0000);
    assert_eq!(cpu.regs.flags.to_byte(), 0x00);
    assert!(!cpu.iff1);
    assert!(!cpu.iff2);
    assert_eq!(cpu.im, InterruptMode::Mode0);

    // Reset also wipes writable memory.
    assert_eq!(bus.mem.read_byte(0x0000).unwrap(), 0x00);
}

#[test]
fn ld_add_nop_program() {
    // ld a,5 ; add a,3 ; nop
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x05, 0xC6, 0x03, 0x00]);
    let total = run_steps(&mut cpu, &mut bus, 3);

    assert_eq!(cpu.regs.a, 0x08);
    assert_eq!(cpu.regs.pc, 0x0005);
    assert!(!cpu.regs.flags.sign);
    assert!(!cpu.regs.flags.zero);
    assert!(!cpu.regs.flags.half_carry);
    assert!(!cpu.regs.flags.parity_overflow);
    assert!(!cpu.regs.flags.add_sub);
    assert!(!cpu.regs.flags.carry);
    assert!(!cpu.regs.flags.undoc_y);
    // X mirrors bit 3 of the result, and 0x08 has it set.
    assert!(cpu.regs.flags.undoc_x);

    // 7 + 7 + 4 T-states.
    assert_eq!(total, 18);
}

#[test]
fn add_overflow_program() {
    // ld a,0x7f ; add a,a
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x7F, 0x87]);
    run_steps(&mut cpu, &mut bus, 2);

    assert_eq!(cpu.regs.a, 0xFE);
    assert!(cpu.regs.flags.sign);
    assert!(!cpu.regs.flags.zero);
    assert!(cpu.regs.flags.half_carry);
    assert!(cpu.regs.flags.parity_overflow);
    assert!(!cpu.regs.flags.add_sub);
    assert!(!cpu.regs.flags.carry);
}

#[test]
fn outi_decrements_b_through_zero() {
    // ld c,2 ; ld a,0x41 ; outi ; outi - B starts at zero.
    let (mut cpu, mut bus) = cpu_with_program(&[0x0E, 0x02, 0x3E, 0x41, 0xED, 0xA3, 0xED, 0xA3]);

    let writes = Arc::new(Mutex::new(Vec::new()));
    let writes_in_hook = writes.clone();
    bus.ports.install(0x02, PortHooks::new().with_write(Box::new(move |port, val| {
        writes_in_hook.lock().unwrap().push((port, val));
    })));

    run_steps(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.b(), 0xFF);
    assert_eq!(cpu.regs.hl, 0x0001);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.b(), 0xFE);
    assert_eq!(cpu.regs.hl, 0x0002);

    // Each outi sent the byte under the old HL to port 2.
    assert_eq!(writes.lock().unwrap().as_slice(), &[(0x02, 0x0E), (0x02, 0x02)]);
}

#[test]
fn neg_of_one() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0x44]);
    cpu.regs.a = 0x01;
    run_steps(&mut cpu, &mut bus, 1);

    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.flags.sign);
    assert!(!cpu.regs.flags.zero);
    assert!(cpu.regs.flags.half_carry);
    assert!(!cpu.regs.flags.parity_overflow);
    assert!(cpu.regs.flags.add_sub);
    assert!(cpu.regs.flags.carry);
}

#[test]
fn ddcb_rlc_indexed() {
    // rlc (ix+2) with ix=0x1000 and mem[0x1002]=0x81.
    let (mut cpu, mut bus) = cpu_with_program(&[0xDD, 0xCB, 0x02, 0x06]);
    cpu.regs.ix = 0x1000;
    bus.mem.write_byte(0x1002, 0x81).unwrap();

    let total = run_steps(&mut cpu, &mut bus, 1);

    assert_eq!(bus.mem.read_byte(0x1002).unwrap(), 0x03);
    assert!(cpu.regs.flags.carry);
    assert!(cpu.regs.flags.parity_overflow);
    assert_eq!(cpu.regs.pc, 0x0004);
    assert_eq!(cpu.regs.wz, 0x1002);
    assert_eq!(total, 23);
}

#[test]
fn ddcb_copy_variant_writes_register_too() {
    // The undocumented rlc (ix+1),b form.
    let (mut cpu, mut bus) = cpu_with_program(&[0xDD, 0xCB, 0x01, 0x00]);
    cpu.regs.ix = 0x2000;
    bus.mem.write_byte(0x2001, 0x80).unwrap();

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(bus.mem.read_byte(0x2001).unwrap(), 0x01);
    assert_eq!(cpu.regs.b(), 0x01);
    assert!(cpu.regs.flags.carry);
}

#[test]
fn inc_wraps_and_dec_wraps() {
    // ld a,0xff ; inc a ; dec a
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0xFF, 0x3C, 0x3D]);
    run_steps(&mut cpu, &mut bus, 2);

    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flags.zero);
    assert!(cpu.regs.flags.half_carry);
    assert!(!cpu.regs.flags.add_sub);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.flags.sign);
    assert!(cpu.regs.flags.half_carry);
    assert!(cpu.regs.flags.add_sub);
    assert!(!cpu.regs.flags.zero);
}

#[test]
fn push_pop_round_trips() {
    // push bc ; pop de ; push ix ; pop iy
    let (mut cpu, mut bus) = cpu_with_program(&[0xC5, 0xD1, 0xDD, 0xE5, 0xFD, 0xE1]);
    cpu.regs.bc = 0x1234;
    cpu.regs.ix = 0xBEEF;
    let old_sp = cpu.regs.sp;

    run_steps(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.regs.de, 0x1234);
    assert_eq!(cpu.regs.iy, 0xBEEF);
    assert_eq!(cpu.regs.sp, old_sp);
}

#[test]
fn push_af_stores_the_flag_byte() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xF5, 0xC1]);
    cpu.regs.a = 0x9C;
    cpu.regs.set_flags(0b1010_0101);

    run_steps(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.bc, 0x9CA5);
}

#[test]
fn ldi_then_reversed_ldd_is_identity_at_the_source() {
    // ldi ; ldd with HL/DE swapped back by hand between them.
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0xA0, 0xED, 0xA8]);
    bus.mem.write_byte(0x4000, 0xAA).unwrap();
    bus.mem.write_byte(0x5000, 0x55).unwrap();

    cpu.regs.hl = 0x4000;
    cpu.regs.de = 0x5000;
    cpu.regs.bc = 0x0001;
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(bus.mem.read_byte(0x5000).unwrap(), 0xAA);
    assert!(!cpu.regs.flags.parity_overflow); // BC hit zero
    assert_eq!(cpu.regs.hl, 0x4001);
    assert_eq!(cpu.regs.de, 0x5001);

    cpu.regs.hl = 0x5000;
    cpu.regs.de = 0x4000;
    cpu.regs.bc = 0x0001;
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(bus.mem.read_byte(0x4000).unwrap(), 0xAA);
    assert_eq!(cpu.regs.bc, 0x0000);
}

#[test]
fn ldir_loops_with_full_instruction_timing() {
    // ldir with BC=2: one 21 T-state iteration, one 16 T-state one.
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0xB0]);
    bus.mem.write_bytes(0x4000, &[0x11, 0x22]).unwrap();
    cpu.regs.hl = 0x4000;
    cpu.regs.de = 0x5000;
    cpu.regs.bc = 0x0002;

    let first = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(first, 21);
    assert_eq!(cpu.regs.pc, 0x0000); // back on its own first byte
    assert_eq!(cpu.regs.bc, 0x0001);
    assert_eq!(cpu.regs.wz, 0x0001);

    let second = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(second, 16);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.regs.bc, 0x0000);
    assert_eq!(bus.mem.read_bytes(0x5000, 2).unwrap(), vec![0x11, 0x22]);
}

#[test]
fn cpir_stops_on_match() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0xB1]);
    bus.mem.write_bytes(0x4000, &[0x10, 0x20, 0x30]).unwrap();
    cpu.regs.a = 0x20;
    cpu.regs.hl = 0x4000;
    cpu.regs.bc = 0x0003;

    // First iteration: no match, loops in place.
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0000);

    // Second iteration matches and falls through with BC=1 left.
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert!(cpu.regs.flags.zero);
    assert!(cpu.regs.flags.parity_overflow);
    assert_eq!(cpu.regs.bc, 0x0001);
    assert_eq!(cpu.regs.hl, 0x4002);
}

#[test]
fn conditional_branch_timing() {
    // jr nz,+2 with Z set: 7 T-states, fall through.
    let (mut cpu, mut bus) = cpu_with_program(&[0x20, 0x02, 0x00, 0x00]);
    cpu.regs.flags.zero = true;
    let not_taken = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(not_taken, 7);
    assert_eq!(cpu.regs.pc, 0x0002);

    // The same branch taken: 12 T-states.
    let (mut cpu, mut bus) = cpu_with_program(&[0x20, 0x02, 0x00, 0x00]);
    let taken = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(taken, 12);
    assert_eq!(cpu.regs.pc, 0x0004);
    assert_eq!(cpu.regs.wz, 0x0004);
}

#[test]
fn djnz_counts_down() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x10, 0xFE]); // djnz to itself
    cpu.regs.set_b(2);

    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 13);
    assert_eq!(cpu.regs.pc, 0x0000);
    assert_eq!(cpu.regs.b(), 1);

    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 8);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.regs.b(), 0);
}

#[test]
fn call_and_ret() {
    // call 0x0010 ; ... at 0x0010: ret
    let (mut cpu, mut bus) = cpu_with_program(&[0xCD, 0x10, 0x00]);
    bus.mem.write_byte(0x0010, 0xC9).unwrap();

    let call_t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(call_t, 17);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0xFFFD);
    // The return address on the stack is the byte after the call.
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0003);

    let ret_t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(ret_t, 10);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFF);
    assert_eq!(cpu.regs.wz, 0x0003);
}

#[test]
fn ret_cc_timing_both_ways() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xC0, 0xC0]); // ret nz twice
    cpu.regs.sp = 0x8000;
    bus.mem.write_word(0x8000, 0x1234).unwrap();

    cpu.regs.flags.zero = true;
    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 5);
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.regs.flags.zero = false;
    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 11);
    assert_eq!(cpu.regs.pc, 0x1234);
}

#[test]
fn rst_pushes_and_vectors() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xEF]); // rst 28h
    let t = run_steps(&mut cpu, &mut bus, 1);

    assert_eq!(t, 11);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(cpu.regs.wz, 0x0028);
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0001);
}

#[test]
fn ex_sp_hl_swaps_and_latches_wz() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xE3]);
    cpu.regs.hl = 0x1122;
    cpu.regs.sp = 0x8000;
    bus.mem.write_word(0x8000, 0x3344).unwrap();

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 19);
    assert_eq!(cpu.regs.hl, 0x3344);
    assert_eq!(bus.mem.read_word(0x8000).unwrap(), 0x1122);
    assert_eq!(cpu.regs.wz, 0x3344);
}

#[test]
fn exchange_instructions() {
    // exx ; ex af,af' ; ex de,hl
    let (mut cpu, mut bus) = cpu_with_program(&[0xD9, 0x08, 0xEB]);
    cpu.regs.bc = 0x1111;
    cpu.regs.bc_prime = 0x2222;
    cpu.regs.a = 0x33;
    cpu.regs.a_prime = 0x44;
    cpu.regs.de = 0x5555;
    cpu.regs.hl = 0x6666;

    run_steps(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.bc, 0x2222);
    assert_eq!(cpu.regs.bc_prime, 0x1111);
    assert_eq!(cpu.regs.a, 0x44);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.de, 0x6666);
    assert_eq!(cpu.regs.hl, 0x5555);
}

#[test]
fn daa_after_add_and_sub() {
    // ld a,0x15 ; add a,0x27 ; daa
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x15, 0xC6, 0x27, 0x27]);
    run_steps(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.regs.flags.carry);
    assert!(!cpu.regs.flags.add_sub);

    // ld a,0x20 ; sub 0x05 ; daa
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x20, 0xD6, 0x05, 0x27]);
    run_steps(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x15);
    assert!(cpu.regs.flags.add_sub);
    assert!(!cpu.regs.flags.carry);
}

#[test]
fn indexed_arithmetic_and_loads() {
    // ld (ix+1),0x40 ; add a,(ix+1) ; ld b,ixh
    let (mut cpu, mut bus) = cpu_with_program(&[
        0xDD, 0x36, 0x01, 0x40,
        0xDD, 0x86, 0x01,
        0xDD, 0x44,
    ]);
    cpu.regs.ix = 0x4000;
    cpu.regs.a = 0x02;

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 19);
    assert_eq!(bus.mem.read_byte(0x4001).unwrap(), 0x40);
    assert_eq!(cpu.regs.wz, 0x4001);

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 19);
    assert_eq!(cpu.regs.a, 0x42);

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 8);
    assert_eq!(cpu.regs.b(), 0x40);
}

#[test]
fn prefix_with_no_hold_collapses_to_nop() {
    // dd inc b: the prefix burns 4 T-states, then inc b runs plain.
    let (mut cpu, mut bus) = cpu_with_program(&[0xDD, 0x04]);

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.regs.b(), 0x00);

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 4);
    assert_eq!(cpu.regs.b(), 0x01);

    // dd dd dd inc b collapses the same way.
    let (mut cpu, mut bus) = cpu_with_program(&[0xDD, 0xDD, 0xDD, 0x04]);
    let t = run_steps(&mut cpu, &mut bus, 4);
    assert_eq!(t, 16);
    assert_eq!(cpu.regs.b(), 0x01);
}

#[test]
fn undefined_ed_is_a_two_byte_nop() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0x00, 0x04]);
    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 8);
    assert_eq!(cpu.regs.pc, 0x0002);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.b(), 0x01);
}

#[test]
fn bit_on_memory_takes_xy_from_wz() {
    // ld a,(0x2834) leaves WZ=0x2835; bit 0,(hl) then mirrors WZ's high
    // byte 0x28 into Y and X.
    let (mut cpu, mut bus) = cpu_with_program(&[0x3A, 0x34, 0x28, 0xCB, 0x46]);
    bus.mem.write_byte(0x4000, 0x01).unwrap();
    cpu.regs.hl = 0x4000;

    run_steps(&mut cpu, &mut bus, 2);
    assert!(!cpu.regs.flags.zero);
    assert!(cpu.regs.flags.half_carry);
    assert!(cpu.regs.flags.undoc_y);  // bit 5 of 0x28
    assert!(cpu.regs.flags.undoc_x);  // bit 3 of 0x28
}

#[test]
fn bit_on_register_takes_xy_from_it() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xCB, 0x68]); // bit 5,b
    cpu.regs.set_b(0b0010_1000);

    run_steps(&mut cpu, &mut bus, 1);
    assert!(!cpu.regs.flags.zero);
    assert!(cpu.regs.flags.undoc_y);
    assert!(cpu.regs.flags.undoc_x);
    assert!(!cpu.regs.flags.sign);
}

#[test]
fn sll_fills_with_one() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xCB, 0x30]); // sll b
    cpu.regs.set_b(0x80);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.b(), 0x01);
    assert!(cpu.regs.flags.carry);
}

#[test]
fn rotating_zero_stays_zero() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xCB, 0x00]); // rlc b
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.b(), 0x00);
    assert!(cpu.regs.flags.zero);
    assert!(!cpu.regs.flags.carry);
}

#[test]
fn ld_a_i_takes_pv_from_iff2() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0x57, 0xED, 0x57]);
    cpu.regs.i = 0x80;

    cpu.iff2 = true;
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.regs.flags.parity_overflow);
    assert!(cpu.regs.flags.sign);

    cpu.iff2 = false;
    run_steps(&mut cpu, &mut bus, 1);
    assert!(!cpu.regs.flags.parity_overflow);
}

#[test]
fn refresh_counter_spins_but_keeps_bit_7() {
    // ld a,0x80 ; ld r,a ; nop ; nop
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x80, 0xED, 0x4F, 0x00, 0x00]);
    run_steps(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.r, 0x80);

    run_steps(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.r, 0x82);

    // Prefixed opcodes refresh once per fetched byte.
    let (mut cpu, mut bus) = cpu_with_program(&[0xCB, 0x00]);
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.r, 0x02);
}

#[test]
fn in_a_from_disconnected_port_floats_high() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xDB, 0x10]);
    cpu.regs.a = 0x12;
    let t = run_steps(&mut cpu, &mut bus, 1);

    assert_eq!(t, 11);
    assert_eq!(cpu.regs.a, 0xFF);
    // WZ is the full 16-bit port address plus one.
    assert_eq!(cpu.regs.wz, 0x1211);
}

#[test]
fn out_and_in_through_hooks() {
    // out (0x20),a ; in a,(0x20)
    let (mut cpu, mut bus) = cpu_with_program(&[0xD3, 0x20, 0xDB, 0x20]);
    cpu.regs.a = 0x5A;

    let latch = Arc::new(Mutex::new(0u8));
    let latch_write = latch.clone();
    let latch_read = latch.clone();
    bus.ports.install(0x20, PortHooks::new()
        .with_write(Box::new(move |_, val| *latch_write.lock().unwrap() = val))
        .with_read(Box::new(move |_| !*latch_read.lock().unwrap())));

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(*latch.lock().unwrap(), 0x5A);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0xA5);
}

#[test]
fn halt_keeps_ticking_until_nmi() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x76, 0x00]);
    let lines = bus.interrupt_lines();

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.state, State::Halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    // Halted steps are synthetic NOPs: four T-states each, R moving.
    let r_before = cpu.regs.r;
    let t = run_steps(&mut cpu, &mut bus, 2);
    assert_eq!(t, 8);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.regs.r, r_before.wrapping_add(2));

    lines.raise_nmi();
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.state, State::Running);
    assert_eq!(cpu.regs.pc, 0x0066);
    // The return address is the instruction after the halt.
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0001);
}

#[test]
fn nmi_preserves_iff2_for_retn() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00]);
    bus.mem.write_bytes(0x0066, &[0xED, 0x45]).unwrap(); // retn
    let lines = bus.interrupt_lines();

    cpu.iff1 = true;
    cpu.iff2 = true;
    lines.raise_nmi();

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0066);
    assert!(!cpu.iff1);
    assert!(cpu.iff2);

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert!(cpu.iff1); // restored from IFF2
}

#[test]
fn ei_defers_maskable_interrupts_by_one_instruction() {
    // ei ; nop ; nop, with INT already pending and mode 1 selected.
    let (mut cpu, mut bus) = cpu_with_program(&[0xFB, 0x00, 0x00]);
    cpu.im = InterruptMode::Mode1;
    let lines = bus.interrupt_lines();
    lines.raise_int();

    // The ei instruction itself must not let the interrupt in.
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert!(cpu.iff1);

    // After the following instruction, mode 1 vectors to 0x38.
    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.pc, 0x0038);
    assert!(!cpu.iff1);
    assert!(!cpu.iff2);
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0002);
    // 4 for the nop plus 13 for the mode 1 acknowledge.
    assert_eq!(t, 17);
}

#[test]
fn im2_vectors_through_the_table() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xFB, 0x00]);
    cpu.im = InterruptMode::Mode2;
    cpu.regs.i = 0x20;
    bus.mem.write_word(0x2040, 0x1234).unwrap();
    bus.set_int_data_callback(Some(Box::new(|| 0x40)));

    let lines = bus.interrupt_lines();
    lines.raise_int();

    run_steps(&mut cpu, &mut bus, 1); // ei
    let t = run_steps(&mut cpu, &mut bus, 1); // nop + acknowledge

    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.wz, 0x1234);
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0002);
    // 4 for the nop plus 19 for the mode 2 acknowledge.
    assert_eq!(t, 23);
}

#[test]
fn im0_executes_the_injected_instruction() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xFB, 0x00]);
    cpu.im = InterruptMode::Mode0;
    bus.set_int_data_callback(Some(Box::new(|| 0xCF))); // rst 08h

    let lines = bus.interrupt_lines();
    lines.raise_int();

    run_steps(&mut cpu, &mut bus, 1);
    run_steps(&mut cpu, &mut bus, 1);

    assert_eq!(cpu.regs.pc, 0x0008);
    // The injected rst pushed the interrupted PC, not something stale.
    assert_eq!(bus.mem.read_word(0xFFFD).unwrap(), 0x0002);
}

#[test]
fn interrupt_without_callback_is_a_configuration_error() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xFB, 0x00]);
    cpu.im = InterruptMode::Mode2;
    let lines = bus.interrupt_lines();
    lines.raise_int();

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.step(&mut bus), Err(CoreError::InterruptMisconfigured { mode: 2 }));
}

#[test]
fn end_on_halt_stops_the_run() {
    let mut bus = ram_bus();
    bus.mem.load_from_buffer(0x0000, &[0x3E, 0x01, 0x76], "test program").unwrap();

    let mut cpu = test_cpu_with_options(CpuOptions {
        end_on_halt: true,
        ..CpuOptions::default()
    });

    cpu.run_until_stopped(&mut bus).unwrap();
    assert_eq!(cpu.state, State::Stopped);
    assert_eq!(cpu.regs.a, 0x01);
}

#[test]
fn stop_latch_is_honored_at_the_boundary() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00]);
    let stopper = cpu.stop_handle();

    run_steps(&mut cpu, &mut bus, 1);
    stopper.store(false, Ordering::Relaxed);

    assert_eq!(cpu.step(&mut bus).unwrap(), 0);
    assert_eq!(cpu.state, State::Stopped);
}

#[test]
fn decode_underrun_at_the_top_of_memory_stops_the_engine() {
    // A three-byte jp at 0xFFFE has nowhere to keep its operand.
    let (mut cpu, mut bus) = cpu_with_program(&[]);
    bus.mem.write_byte(0xFFFE, 0xC3).unwrap();
    cpu.regs.pc = 0xFFFE;

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.state, State::Stopped);
}

#[test]
fn breakpoints_fire_but_do_not_block() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00, 0x00]);
    cpu.add_breakpoint(0x0001);

    let hits = Arc::new(Mutex::new(Vec::new()));
    let hits_in_hook = hits.clone();
    cpu.hooks.on_breakpoint = Some(Box::new(move |addr| {
        hits_in_hook.lock().unwrap().push(addr);
    }));

    run_steps(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(hits.lock().unwrap().as_slice(), &[0x0001]);
}

#[test]
fn wait_cycles_stretch_the_next_access() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00]);
    let waits = cpu.wait_cycle_handle();

    waits.store(3, Ordering::Relaxed);
    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 7);
    assert_eq!(run_steps(&mut cpu, &mut bus, 1), 4);
}

#[test]
fn sixteen_bit_arithmetic_wz_and_flags() {
    // add hl,bc with carry across bit 11; sbc hl,bc afterwards.
    let (mut cpu, mut bus) = cpu_with_program(&[0x09, 0xED, 0x42]);
    cpu.regs.hl = 0x0FFF;
    cpu.regs.bc = 0x0001;
    cpu.regs.flags.sign = true; // must survive add hl,bc

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.hl, 0x1000);
    assert!(cpu.regs.flags.half_carry);
    assert!(cpu.regs.flags.sign);
    assert_eq!(cpu.regs.wz, 0x1000);

    cpu.regs.flags.carry = false;
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.hl, 0x0FFF);
    assert!(cpu.regs.flags.add_sub);
    assert!(!cpu.regs.flags.zero);
}

#[test]
fn ld_a_from_address_latches_wz() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x3A, 0x00, 0x40, 0x32, 0x00, 0x50]);
    bus.mem.write_byte(0x4000, 0x77).unwrap();

    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.wz, 0x4001);

    // The store form leaks A into WZ's high byte.
    run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(bus.mem.read_byte(0x5000).unwrap(), 0x77);
    assert_eq!(cpu.regs.wz, 0x7701);
}

#[test]
fn rld_rotates_nybbles_through_the_accumulator() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xED, 0x6F]);
    cpu.regs.a = 0x7A;
    cpu.regs.hl = 0x4000;
    bus.mem.write_byte(0x4000, 0x31).unwrap();

    let t = run_steps(&mut cpu, &mut bus, 1);
    assert_eq!(t, 18);
    assert_eq!(cpu.regs.a, 0x73);
    assert_eq!(bus.mem.read_byte(0x4000).unwrap(), 0x1A);
    assert_eq!(cpu.regs.wz, 0x4001);
}

#[test]
fn every_decoded_instruction_has_a_sane_length() {
    // Whatever four bytes arrive, the decoder's reported size is the
    // byte count the engine will consume.
    for first in 0..=0xFFu16 {
        for second in &[0x00u8, 0x36, 0xCB, 0xDD, 0xE9, 0xFD] {
            let decoded = instructions::decode([first as u8, *second, 0x02, 0x06]);
            let size = decoded.inst.size;
            assert!(size >= 1 && size <= 4, "opcode {:02X} {:02X} decoded to size {}", first, second, size);

            let fetched = decoded.prefix.fetched_bytes();
            assert!(fetched <= size, "opcode {:02X} {:02X}: {} fetched bytes for size {}", first, second, fetched, size);
        }
    }

    // Spot checks across the prefix schemes.
    assert_eq!(instructions::decode([0x00, 0, 0, 0]).inst.size, 1);
    assert_eq!(instructions::decode([0x3E, 0, 0, 0]).inst.size, 2);
    assert_eq!(instructions::decode([0xC3, 0, 0, 0]).inst.size, 3);
    assert_eq!(instructions::decode([0xCB, 0x47, 0, 0]).inst.size, 2);
    assert_eq!(instructions::decode([0xED, 0x43, 0, 0]).inst.size, 4);
    assert_eq!(instructions::decode([0xDD, 0x36, 0, 0]).inst.size, 4);
    assert_eq!(instructions::decode([0xDD, 0xCB, 0x01, 0x06]).inst.size, 4);
    assert_eq!(instructions::decode([0xDD, 0xDD, 0, 0]).inst.size, 1);
}

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

// This file contains the instruction set of the Zilog Z80.
//
// Because the Z80 is a reasonably simple CPU, it is still within reason
// to implement each of its opcodes as a separate routine, and to use a set
// of look-up tables to get the corresponding routine for the instruction
// to be executed.  The register-operand families, which differ from one
// another only in which register they touch, are stamped out by macros;
// everything with its own personality is written out by hand.
//
// An interesting property of the Z80 is that it has no "illegal
// instruction" exception: illegal instructions are interpreted as NOPs, so
// any possible sequence of bytes is a valid Z80 program (albeit not always
// a useful one).  A dd or fd prefix in front of an opcode it cannot index
// burns four T-states as a NOP and lets the opcode execute plain, which is
// also how chains of dd and fd prefixes collapse; undefined ed opcodes are
// the classic two-byte, eight T-state "ed NOP".
//
// The undocumented instructions are implemented - the ixh/ixl/iyh/iyl
// forms, sll, out (c),0, in (c), the ed duplicates of neg, retn and im,
// and the ddcb/fdcb forms that write memory and a register at once - and
// so are the undocumented X and Y flag bits and the WZ (MEMPTR) latch
// whose value leaks out through the flags of bit n,(hl).
//
// A routine here runs after the engine has read its operand bytes and
// moved PC past the instruction: operands come from the decoded package
// rather than from repeated instruction-stream reads, a jump taken is an
// explicit PC store, and the repeating block instructions loop by putting
// PC back on their own first byte.  Data traffic goes through the timed
// accessors on the CPU, so the machine-cycle timer sees every bus event;
// the fixed instruction overhead is accounted against the documented
// clock_cycles totals by the engine, with `extra_t` carrying the
// taken-branch surcharge.

// Parentheses help code readability, which is especially important here.
#![allow(unused_parens)]

use log::warn;

use crate::bits;
use crate::bus;
use crate::z80::cpu;
use crate::z80::flags;

pub struct Instruction {
    pub execute:       fn (&mut cpu::CPU, &mut bus::Bus),
    pub clock_cycles:  u32,
    pub size:          u16,
}

pub struct InstructionSet {
    pub prefix_nop: Instruction,
    pub nop_2:      Instruction,
    pub main:       [Instruction; 256],
    pub extended:   [Instruction; 96],
    pub bit:        [Instruction; 256],
    pub ix:         [Instruction; 256],
    pub ix_bit:     [Instruction; 256],
    pub iy:         [Instruction; 256],
    pub iy_bit:     [Instruction; 256],
}

// Which prefix scheme an instruction was decoded under.  It tells the
// engine how many opcode-fetch cycles to emit (and, for the doubly
// prefixed forms, which index register WZ takes its effective address
// from); the bytes after the fetched ones are operand reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prefix {
    None,
    Cb,
    Ed,
    Dd,
    Fd,
    DdCb,
    FdCb,
}

impl Prefix {
    // How many of the instruction's bytes go out as opcode fetches.
    // The displacement and trailing opcode of the ddcb/fdcb forms are
    // plain reads on the bus, not fetches.
    pub fn fetched_bytes(&self) -> u16 {
        match self {
            Prefix::None => 1,
            _            => 2,
        }
    }
}

// The operand bytes of the decoded instruction, as raw bytes; what they
// mean (immediate, address half, displacement) is the microcode's
// business.  For the ddcb/fdcb forms b0 is the displacement and b1 the
// trailing opcode byte.
#[derive(Copy, Clone, Debug, Default)]
pub struct Args {
    pub b0: u8,
    pub b1: u8,
}

impl Args {
    pub fn none() -> Args {
        Args::default()
    }

    pub fn new(b0: u8, b1: u8) -> Args {
        Args { b0, b1 }
    }

    pub fn imm8(&self) -> u8 {
        self.b0
    }

    // Immediate words travel low byte first.
    pub fn imm16(&self) -> u16 {
        bits::compose_word(self.b1, self.b0)
    }

    pub fn displacement(&self) -> i8 {
        self.b0 as i8
    }

    // The immediate of ld (ix+d),n, which follows the displacement.
    pub fn trailing_imm8(&self) -> u8 {
        self.b1
    }
}

pub struct Decoded {
    pub inst:    &'static Instruction,
    pub prefix:  Prefix,
    pub args:    Args,
}

// One look-up table entry: the microcode routine, the documented T-state
// total of the untaken path, and the instruction length in bytes.
macro_rules! inst {
    ($execute:ident, $clock_cycles:expr, $size:expr) => {
        Instruction {
            execute: $execute,
            clock_cycles: $clock_cycles,
            size: $size,
        }
    };
}
pub static INSTRUCTION_SET: InstructionSet = InstructionSet {
    // The one-byte NOP a dd/fd prefix degenerates to when it has nothing
    // to index, and the two-byte NOP of the undefined ed encodings:
    prefix_nop: inst!(inst_nop1, 4, 1),
    nop_2:      inst!(inst_nop2, 8, 2),
    // Main instructions, mostly inherited from the Intel 8080:
    main: [
        /* 00 */ inst!(inst_nop1, 4, 1),
        /* 01 */ inst!(inst_ld_bc_im16, 10, 3),
        /* 02 */ inst!(inst_ld_mem_bc_a, 7, 1),
        /* 03 */ inst!(inst_inc_bc, 6, 1),
        /* 04 */ inst!(inst_inc_b, 4, 1),
        /* 05 */ inst!(inst_dec_b, 4, 1),
        /* 06 */ inst!(inst_ld_b_im8, 7, 2),
        /* 07 */ inst!(inst_rlca, 4, 1),
        /* 08 */ inst!(inst_ex_af_af_prime, 4, 1),
        /* 09 */ inst!(inst_add_hl_bc, 11, 1),
        /* 0A */ inst!(inst_ld_a_mem_bc, 7, 1),
        /* 0B */ inst!(inst_dec_bc, 6, 1),
        /* 0C */ inst!(inst_inc_c, 4, 1),
        /* 0D */ inst!(inst_dec_c, 4, 1),
        /* 0E */ inst!(inst_ld_c_im8, 7, 2),
        /* 0F */ inst!(inst_rrca, 4, 1),
        /* 10 */ inst!(inst_djnz_im8, 8, 2),
        /* 11 */ inst!(inst_ld_de_im16, 10, 3),
        /* 12 */ inst!(inst_ld_mem_de_a, 7, 1),
        /* 13 */ inst!(inst_inc_de, 6, 1),
        /* 14 */ inst!(inst_inc_d, 4, 1),
        /* 15 */ inst!(inst_dec_d, 4, 1),
        /* 16 */ inst!(inst_ld_d_im8, 7, 2),
        /* 17 */ inst!(inst_rla, 4, 1),
        /* 18 */ inst!(inst_jr_im8, 12, 2),
        /* 19 */ inst!(inst_add_hl_de, 11, 1),
        /* 1A */ inst!(inst_ld_a_mem_de, 7, 1),
        /* 1B */ inst!(inst_dec_de, 6, 1),
        /* 1C */ inst!(inst_inc_e, 4, 1),
        /* 1D */ inst!(inst_dec_e, 4, 1),
        /* 1E */ inst!(inst_ld_e_im8, 7, 2),
        /* 1F */ inst!(inst_rra, 4, 1),
        /* 20 */ inst!(inst_jr_nz_im8, 7, 2),
        /* 21 */ inst!(inst_ld_hl_im16, 10, 3),
        /* 22 */ inst!(inst_ld_mem_im16_hl, 16, 3),
        /* 23 */ inst!(inst_inc_hl, 6, 1),
        /* 24 */ inst!(inst_inc_h, 4, 1),
        /* 25 */ inst!(inst_dec_h, 4, 1),
        /* 26 */ inst!(inst_ld_h_im8, 7, 2),
        /* 27 */ inst!(inst_daa, 4, 1),
        /* 28 */ inst!(inst_jr_z_im8, 7, 2),
        /* 29 */ inst!(inst_add_hl_hl, 11, 1),
        /* 2A */ inst!(inst_ld_hl_mem_im16, 16, 3),
        /* 2B */ inst!(inst_dec_hl, 6, 1),
        /* 2C */ inst!(inst_inc_l, 4, 1),
        /* 2D */ inst!(inst_dec_l, 4, 1),
        /* 2E */ inst!(inst_ld_l_im8, 7, 2),
        /* 2F */ inst!(inst_cpl, 4, 1),
        /* 30 */ inst!(inst_jr_nc_im8, 7, 2),
        /* 31 */ inst!(inst_ld_sp_im16, 10, 3),
        /* 32 */ inst!(inst_ld_mem_im16_a, 13, 3),
        /* 33 */ inst!(inst_inc_sp, 6, 1),
        /* 34 */ inst!(inst_inc_mem_hl, 11, 1),
        /* 35 */ inst!(inst_dec_mem_hl, 11, 1),
        /* 36 */ inst!(inst_ld_mem_hl_im8, 10, 2),
        /* 37 */ inst!(inst_scf, 4, 1),
        /* 38 */ inst!(inst_jr_c_im8, 7, 2),
        /* 39 */ inst!(inst_add_hl_sp, 11, 1),
        /* 3A */ inst!(inst_ld_a_mem_im16, 13, 3),
        /* 3B */ inst!(inst_dec_sp, 6, 1),
        /* 3C */ inst!(inst_inc_a, 4, 1),
        /* 3D */ inst!(inst_dec_a, 4, 1),
        /* 3E */ inst!(inst_ld_a_im8, 7, 2),
        /* 3F */ inst!(inst_ccf, 4, 1),
        /* 40 */ inst!(inst_ld_b_b, 4, 1),
        /* 41 */ inst!(inst_ld_b_c, 4, 1),
        /* 42 */ inst!(inst_ld_b_d, 4, 1),
        /* 43 */ inst!(inst_ld_b_e, 4, 1),
        /* 44 */ inst!(inst_ld_b_h, 4, 1),
        /* 45 */ inst!(inst_ld_b_l, 4, 1),
        /* 46 */ inst!(inst_ld_b_mem_hl, 7, 1),
        /* 47 */ inst!(inst_ld_b_a, 4, 1),
        /* 48 */ inst!(inst_ld_c_b, 4, 1),
        /* 49 */ inst!(inst_ld_c_c, 4, 1),
        /* 4A */ inst!(inst_ld_c_d, 4, 1),
        /* 4B */ inst!(inst_ld_c_e, 4, 1),
        /* 4C */ inst!(inst_ld_c_h, 4, 1),
        /* 4D */ inst!(inst_ld_c_l, 4, 1),
        /* 4E */ inst!(inst_ld_c_mem_hl, 7, 1),
        /* 4F */ inst!(inst_ld_c_a, 4, 1),
        /* 50 */ inst!(inst_ld_d_b, 4, 1),
        /* 51 */ inst!(inst_ld_d_c, 4, 1),
        /* 52 */ inst!(inst_ld_d_d, 4, 1),
        /* 53 */ inst!(inst_ld_d_e, 4, 1),
        /* 54 */ inst!(inst_ld_d_h, 4, 1),
        /* 55 */ inst!(inst_ld_d_l, 4, 1),
        /* 56 */ inst!(inst_ld_d_mem_hl, 7, 1),
        /* 57 */ inst!(inst_ld_d_a, 4, 1),
        /* 58 */ inst!(inst_ld_e_b, 4, 1),
        /* 59 */ inst!(inst_ld_e_c, 4, 1),
        /* 5A */ inst!(inst_ld_e_d, 4, 1),
        /* 5B */ inst!(inst_ld_e_e, 4, 1),
        /* 5C */ inst!(inst_ld_e_h, 4, 1),
        /* 5D */ inst!(inst_ld_e_l, 4, 1),
        /* 5E */ inst!(inst_ld_e_mem_hl, 7, 1),
        /* 5F */ inst!(inst_ld_e_a, 4, 1),
        /* 60 */ inst!(inst_ld_h_b, 4, 1),
        /* 61 */ inst!(inst_ld_h_c, 4, 1),
        /* 62 */ inst!(inst_ld_h_d, 4, 1),
        /* 63 */ inst!(inst_ld_h_e, 4, 1),
        /* 64 */ inst!(inst_ld_h_h, 4, 1),
        /* 65 */ inst!(inst_ld_h_l, 4, 1),
        /* 66 */ inst!(inst_ld_h_mem_hl, 7, 1),
        /* 67 */ inst!(inst_ld_h_a, 4, 1),
        /* 68 */ inst!(inst_ld_l_b, 4, 1),
        /* 69 */ inst!(inst_ld_l_c, 4, 1),
        /* 6A */ inst!(inst_ld_l_d, 4, 1),
        /* 6B */ inst!(inst_ld_l_e, 4, 1),
        /* 6C */ inst!(inst_ld_l_h, 4, 1),
        /* 6D */ inst!(inst_ld_l_l, 4, 1),
        /* 6E */ inst!(inst_ld_l_mem_hl, 7, 1),
        /* 6F */ inst!(inst_ld_l_a, 4, 1),
        /* 70 */ inst!(inst_ld_mem_hl_b, 7, 1),
        /* 71 */ inst!(inst_ld_mem_hl_c, 7, 1),
        /* 72 */ inst!(inst_ld_mem_hl_d, 7, 1),
        /* 73 */ inst!(inst_ld_mem_hl_e, 7, 1),
        /* 74 */ inst!(inst_ld_mem_hl_h, 7, 1),
        /* 75 */ inst!(inst_ld_mem_hl_l, 7, 1),
        /* 76 */ inst!(inst_halt, 4, 1),
        /* 77 */ inst!(inst_ld_mem_hl_a, 7, 1),
        /* 78 */ inst!(inst_ld_a_b, 4, 1),
        /* 79 */ inst!(inst_ld_a_c, 4, 1),
        /* 7A */ inst!(inst_ld_a_d, 4, 1),
        /* 7B */ inst!(inst_ld_a_e, 4, 1),
        /* 7C */ inst!(inst_ld_a_h, 4, 1),
        /* 7D */ inst!(inst_ld_a_l, 4, 1),
        /* 7E */ inst!(inst_ld_a_mem_hl, 7, 1),
        /* 7F */ inst!(inst_ld_a_a, 4, 1),
        /* 80 */ inst!(inst_add_a_b, 4, 1),
        /* 81 */ inst!(inst_add_a_c, 4, 1),
        /* 82 */ inst!(inst_add_a_d, 4, 1),
        /* 83 */ inst!(inst_add_a_e, 4, 1),
        /* 84 */ inst!(inst_add_a_h, 4, 1),
        /* 85 */ inst!(inst_add_a_l, 4, 1),
        /* 86 */ inst!(inst_add_a_mem_hl, 7, 1),
        /* 87 */ inst!(inst_add_a_a, 4, 1),
        /* 88 */ inst!(inst_adc_a_b, 4, 1),
        /* 89 */ inst!(inst_adc_a_c, 4, 1),
        /* 8A */ inst!(inst_adc_a_d, 4, 1),
        /* 8B */ inst!(inst_adc_a_e, 4, 1),
        /* 8C */ inst!(inst_adc_a_h, 4, 1),
        /* 8D */ inst!(inst_adc_a_l, 4, 1),
        /* 8E */ inst!(inst_adc_a_mem_hl, 7, 1),
        /* 8F */ inst!(inst_adc_a_a, 4, 1),
        /* 90 */ inst!(inst_sub_a_b, 4, 1),
        /* 91 */ inst!(inst_sub_a_c, 4, 1),
        /* 92 */ inst!(inst_sub_a_d, 4, 1),
        /* 93 */ inst!(inst_sub_a_e, 4, 1),
        /* 94 */ inst!(inst_sub_a_h, 4, 1),
        /* 95 */ inst!(inst_sub_a_l, 4, 1),
        /* 96 */ inst!(inst_sub_a_mem_hl, 7, 1),
        /* 97 */ inst!(inst_sub_a_a, 4, 1),
        /* 98 */ inst!(inst_sbc_a_b, 4, 1),
        /* 99 */ inst!(inst_sbc_a_c, 4, 1),
        /* 9A */ inst!(inst_sbc_a_d, 4, 1),
        /* 9B */ inst!(inst_sbc_a_e, 4, 1),
        /* 9C */ inst!(inst_sbc_a_h, 4, 1),
        /* 9D */ inst!(inst_sbc_a_l, 4, 1),
        /* 9E */ inst!(inst_sbc_a_mem_hl, 7, 1),
        /* 9F */ inst!(inst_sbc_a_a, 4, 1),
        /* A0 */ inst!(inst_and_a_b, 4, 1),
        /* A1 */ inst!(inst_and_a_c, 4, 1),
        /* A2 */ inst!(inst_and_a_d, 4, 1),
        /* A3 */ inst!(inst_and_a_e, 4, 1),
        /* A4 */ inst!(inst_and_a_h, 4, 1),
        /* A5 */ inst!(inst_and_a_l, 4, 1),
        /* A6 */ inst!(inst_and_a_mem_hl, 7, 1),
        /* A7 */ inst!(inst_and_a_a, 4, 1),
        /* A8 */ inst!(inst_xor_a_b, 4, 1),
        /* A9 */ inst!(inst_xor_a_c, 4, 1),
        /* AA */ inst!(inst_xor_a_d, 4, 1),
        /* AB */ inst!(inst_xor_a_e, 4, 1),
        /* AC */ inst!(inst_xor_a_h, 4, 1),
        /* AD */ inst!(inst_xor_a_l, 4, 1),
        /* AE */ inst!(inst_xor_a_mem_hl, 7, 1),
        /* AF */ inst!(inst_xor_a_a, 4, 1),
        /* B0 */ inst!(inst_or_a_b, 4, 1),
        /* B1 */ inst!(inst_or_a_c, 4, 1),
        /* B2 */ inst!(inst_or_a_d, 4, 1),
        /* B3 */ inst!(inst_or_a_e, 4, 1),
        /* B4 */ inst!(inst_or_a_h, 4, 1),
        /* B5 */ inst!(inst_or_a_l, 4, 1),
        /* B6 */ inst!(inst_or_a_mem_hl, 7, 1),
        /* B7 */ inst!(inst_or_a_a, 4, 1),
        /* B8 */ inst!(inst_cp_a_b, 4, 1),
        /* B9 */ inst!(inst_cp_a_c, 4, 1),
        /* BA */ inst!(inst_cp_a_d, 4, 1),
        /* BB */ inst!(inst_cp_a_e, 4, 1),
        /* BC */ inst!(inst_cp_a_h, 4, 1),
        /* BD */ inst!(inst_cp_a_l, 4, 1),
        /* BE */ inst!(inst_cp_a_mem_hl, 7, 1),
        /* BF */ inst!(inst_cp_a_a, 4, 1),
        /* C0 */ inst!(inst_ret_nz, 5, 1),
        /* C1 */ inst!(inst_pop_bc, 10, 1),
        /* C2 */ inst!(inst_jp_nz_im16, 10, 3),
        /* C3 */ inst!(inst_jp_im16, 10, 3),
        /* C4 */ inst!(inst_call_nz_im16, 10, 3),
        /* C5 */ inst!(inst_push_bc, 11, 1),
        /* C6 */ inst!(inst_add_a_im8, 7, 2),
        /* C7 */ inst!(inst_rst_00h, 11, 1),
        /* C8 */ inst!(inst_ret_z, 5, 1),
        /* C9 */ inst!(inst_ret, 10, 1),
        /* CA */ inst!(inst_jp_z_im16, 10, 3),
        /* CB */ inst!(inst_nop1, 4, 1),
        /* CC */ inst!(inst_call_z_im16, 10, 3),
        /* CD */ inst!(inst_call_im16, 17, 3),
        /* CE */ inst!(inst_adc_a_im8, 7, 2),
        /* CF */ inst!(inst_rst_08h, 11, 1),
        /* D0 */ inst!(inst_ret_nc, 5, 1),
        /* D1 */ inst!(inst_pop_de, 10, 1),
        /* D2 */ inst!(inst_jp_nc_im16, 10, 3),
        /* D3 */ inst!(inst_out_im8_a, 11, 2),
        /* D4 */ inst!(inst_call_nc_im16, 10, 3),
        /* D5 */ inst!(inst_push_de, 11, 1),
        /* D6 */ inst!(inst_sub_a_im8, 7, 2),
        /* D7 */ inst!(inst_rst_10h, 11, 1),
        /* D8 */ inst!(inst_ret_c, 5, 1),
        /* D9 */ inst!(inst_exx, 4, 1),
        /* DA */ inst!(inst_jp_c_im16, 10, 3),
        /* DB */ inst!(inst_in_a_im8, 11, 2),
        /* DC */ inst!(inst_call_c_im16, 10, 3),
        /* DD */ inst!(inst_nop1, 4, 1),
        /* DE */ inst!(inst_sbc_a_im8, 7, 2),
        /* DF */ inst!(inst_rst_18h, 11, 1),
        /* E0 */ inst!(inst_ret_po, 5, 1),
        /* E1 */ inst!(inst_pop_hl, 10, 1),
        /* E2 */ inst!(inst_jp_po_im16, 10, 3),
        /* E3 */ inst!(inst_ex_mem_sp_hl, 19, 1),
        /* E4 */ inst!(inst_call_po_im16, 10, 3),
        /* E5 */ inst!(inst_push_hl, 11, 1),
        /* E6 */ inst!(inst_and_a_im8, 7, 2),
        /* E7 */ inst!(inst_rst_20h, 11, 1),
        /* E8 */ inst!(inst_ret_pe, 5, 1),
        /* E9 */ inst!(inst_jp_hl, 4, 1),
        /* EA */ inst!(inst_jp_pe_im16, 10, 3),
        /* EB */ inst!(inst_ex_de_hl, 4, 1),
        /* EC */ inst!(inst_call_pe_im16, 10, 3),
        /* ED */ inst!(inst_nop1, 4, 1),
        /* EE */ inst!(inst_xor_a_im8, 7, 2),
        /* EF */ inst!(inst_rst_28h, 11, 1),
        /* F0 */ inst!(inst_ret_p, 5, 1),
        /* F1 */ inst!(inst_pop_af, 10, 1),
        /* F2 */ inst!(inst_jp_p_im16, 10, 3),
        /* F3 */ inst!(inst_di, 4, 1),
        /* F4 */ inst!(inst_call_p_im16, 10, 3),
        /* F5 */ inst!(inst_push_af, 11, 1),
        /* F6 */ inst!(inst_or_a_im8, 7, 2),
        /* F7 */ inst!(inst_rst_30h, 11, 1),
        /* F8 */ inst!(inst_ret_m, 5, 1),
        /* F9 */ inst!(inst_ld_sp_hl, 6, 1),
        /* FA */ inst!(inst_jp_m_im16, 10, 3),
        /* FB */ inst!(inst_ei, 4, 1),
        /* FC */ inst!(inst_call_m_im16, 10, 3),
        /* FD */ inst!(inst_nop1, 4, 1),
        /* FE */ inst!(inst_cp_a_im8, 7, 2),
        /* FF */ inst!(inst_rst_38h, 11, 1),
    ],
    // The ed-prefixed extended instructions, 0x40..=0x7F followed by
    // 0xA0..=0xBF:
    extended: [
        /* 40 */ inst!(inst_in_b_mem_bc, 12, 2),
        /* 41 */ inst!(inst_out_mem_bc_b, 12, 2),
        /* 42 */ inst!(inst_sbc_hl_bc, 15, 2),
        /* 43 */ inst!(inst_ld_mem_im16_bc, 20, 4),
        /* 44 */ inst!(inst_neg, 8, 2),
        /* 45 */ inst!(inst_retn, 14, 2),
        /* 46 */ inst!(inst_im0, 8, 2),
        /* 47 */ inst!(inst_ld_i_a, 9, 2),
        /* 48 */ inst!(inst_in_c_mem_bc, 12, 2),
        /* 49 */ inst!(inst_out_mem_bc_c, 12, 2),
        /* 4A */ inst!(inst_adc_hl_bc, 15, 2),
        /* 4B */ inst!(inst_ld_bc_mem_im16, 20, 4),
        /* 4C */ inst!(inst_neg, 8, 2),
        /* 4D */ inst!(inst_reti, 14, 2),
        /* 4E */ inst!(inst_im_0_slash_1, 8, 2),
        /* 4F */ inst!(inst_ld_r_a, 9, 2),
        /* 50 */ inst!(inst_in_d_mem_bc, 12, 2),
        /* 51 */ inst!(inst_out_mem_bc_d, 12, 2),
        /* 52 */ inst!(inst_sbc_hl_de, 15, 2),
        /* 53 */ inst!(inst_ld_mem_im16_de, 20, 4),
        /* 54 */ inst!(inst_neg, 8, 2),
        /* 55 */ inst!(inst_retn, 14, 2),
        /* 56 */ inst!(inst_im1, 8, 2),
        /* 57 */ inst!(inst_ld_a_i, 9, 2),
        /* 58 */ inst!(inst_in_e_mem_bc, 12, 2),
        /* 59 */ inst!(inst_out_mem_bc_e, 12, 2),
        /* 5A */ inst!(inst_adc_hl_de, 15, 2),
        /* 5B */ inst!(inst_ld_de_mem_im16, 20, 4),
        /* 5C */ inst!(inst_neg, 8, 2),
        /* 5D */ inst!(inst_retn, 14, 2),
        /* 5E */ inst!(inst_im_2, 8, 2),
        /* 5F */ inst!(inst_ld_a_r, 9, 2),
        /* 60 */ inst!(inst_in_h_mem_bc, 12, 2),
        /* 61 */ inst!(inst_out_mem_bc_h, 12, 2),
        /* 62 */ inst!(inst_sbc_hl_hl, 15, 2),
        /* 63 */ inst!(inst_ld_mem_im16_hl_2, 20, 4),
        /* 64 */ inst!(inst_neg, 8, 2),
        /* 65 */ inst!(inst_retn, 14, 2),
        /* 66 */ inst!(inst_im0, 8, 2),
        /* 67 */ inst!(inst_rrd, 18, 2),
        /* 68 */ inst!(inst_in_l_mem_bc, 12, 2),
        /* 69 */ inst!(inst_out_mem_bc_l, 12, 2),
        /* 6A */ inst!(inst_adc_hl_hl, 15, 2),
        /* 6B */ inst!(inst_ld_hl_mem_im16_2, 20, 4),
        /* 6C */ inst!(inst_neg, 8, 2),
        /* 6D */ inst!(inst_retn, 14, 2),
        /* 6E */ inst!(inst_im_0_slash_1, 8, 2),
        /* 6F */ inst!(inst_rld, 18, 2),
        /* 70 */ inst!(inst_in_mem_bc, 12, 2),
        /* 71 */ inst!(inst_out_mem_bc_0, 12, 2),
        /* 72 */ inst!(inst_sbc_hl_sp, 15, 2),
        /* 73 */ inst!(inst_ld_mem_im16_sp, 20, 4),
        /* 74 */ inst!(inst_neg, 8, 2),
        /* 75 */ inst!(inst_retn, 14, 2),
        /* 76 */ inst!(inst_im1, 8, 2),
        /* 77 */ inst!(inst_nop2, 8, 2),
        /* 78 */ inst!(inst_in_a_mem_bc, 12, 2),
        /* 79 */ inst!(inst_out_mem_bc_a, 12, 2),
        /* 7A */ inst!(inst_adc_hl_sp, 15, 2),
        /* 7B */ inst!(inst_ld_sp_mem_im16, 20, 4),
        /* 7C */ inst!(inst_neg, 8, 2),
        /* 7D */ inst!(inst_retn, 14, 2),
        /* 7E */ inst!(inst_im_2, 8, 2),
        /* 7F */ inst!(inst_nop2, 8, 2),
        /* A0 */ inst!(inst_ldi, 16, 2),
        /* A1 */ inst!(inst_cpi, 16, 2),
        /* A2 */ inst!(inst_ini, 16, 2),
        /* A3 */ inst!(inst_outi, 16, 2),
        /* A4 */ inst!(inst_nop2, 8, 2),
        /* A5 */ inst!(inst_nop2, 8, 2),
        /* A6 */ inst!(inst_nop2, 8, 2),
        /* A7 */ inst!(inst_nop2, 8, 2),
        /* A8 */ inst!(inst_ldd, 16, 2),
        /* A9 */ inst!(inst_cpd, 16, 2),
        /* AA */ inst!(inst_ind, 16, 2),
        /* AB */ inst!(inst_outd, 16, 2),
        /* AC */ inst!(inst_nop2, 8, 2),
        /* AD */ inst!(inst_nop2, 8, 2),
        /* AE */ inst!(inst_nop2, 8, 2),
        /* AF */ inst!(inst_nop2, 8, 2),
        /* B0 */ inst!(inst_ldir, 16, 2),
        /* B1 */ inst!(inst_cpir, 16, 2),
        /* B2 */ inst!(inst_inir, 16, 2),
        /* B3 */ inst!(inst_outir, 16, 2),
        /* B4 */ inst!(inst_nop2, 8, 2),
        /* B5 */ inst!(inst_nop2, 8, 2),
        /* B6 */ inst!(inst_nop2, 8, 2),
        /* B7 */ inst!(inst_nop2, 8, 2),
        /* B8 */ inst!(inst_lddr, 16, 2),
        /* B9 */ inst!(inst_cpdr, 16, 2),
        /* BA */ inst!(inst_indr, 16, 2),
        /* BB */ inst!(inst_outdr, 16, 2),
        /* BC */ inst!(inst_nop2, 8, 2),
        /* BD */ inst!(inst_nop2, 8, 2),
        /* BE */ inst!(inst_nop2, 8, 2),
        /* BF */ inst!(inst_nop2, 8, 2),
    ],
    // The cb-prefixed bit manipulation and rotate instructions:
    bit: [
        /* 00 */ inst!(inst_rlc_b, 8, 2),
        /* 01 */ inst!(inst_rlc_c, 8, 2),
        /* 02 */ inst!(inst_rlc_d, 8, 2),
        /* 03 */ inst!(inst_rlc_e, 8, 2),
        /* 04 */ inst!(inst_rlc_h, 8, 2),
        /* 05 */ inst!(inst_rlc_l, 8, 2),
        /* 06 */ inst!(inst_rlc_mem_hl, 15, 2),
        /* 07 */ inst!(inst_rlc_a, 8, 2),
        /* 08 */ inst!(inst_rrc_b, 8, 2),
        /* 09 */ inst!(inst_rrc_c, 8, 2),
        /* 0A */ inst!(inst_rrc_d, 8, 2),
        /* 0B */ inst!(inst_rrc_e, 8, 2),
        /* 0C */ inst!(inst_rrc_h, 8, 2),
        /* 0D */ inst!(inst_rrc_l, 8, 2),
        /* 0E */ inst!(inst_rrc_mem_hl, 15, 2),
        /* 0F */ inst!(inst_rrc_a, 8, 2),
        /* 10 */ inst!(inst_rl_b, 8, 2),
        /* 11 */ inst!(inst_rl_c, 8, 2),
        /* 12 */ inst!(inst_rl_d, 8, 2),
        /* 13 */ inst!(inst_rl_e, 8, 2),
        /* 14 */ inst!(inst_rl_h, 8, 2),
        /* 15 */ inst!(inst_rl_l, 8, 2),
        /* 16 */ inst!(inst_rl_mem_hl, 15, 2),
        /* 17 */ inst!(inst_rl_a, 8, 2),
        /* 18 */ inst!(inst_rr_b, 8, 2),
        /* 19 */ inst!(inst_rr_c, 8, 2),
        /* 1A */ inst!(inst_rr_d, 8, 2),
        /* 1B */ inst!(inst_rr_e, 8, 2),
        /* 1C */ inst!(inst_rr_h, 8, 2),
        /* 1D */ inst!(inst_rr_l, 8, 2),
        /* 1E */ inst!(inst_rr_mem_hl, 15, 2),
        /* 1F */ inst!(inst_rr_a, 8, 2),
        /* 20 */ inst!(inst_sla_b, 8, 2),
        /* 21 */ inst!(inst_sla_c, 8, 2),
        /* 22 */ inst!(inst_sla_d, 8, 2),
        /* 23 */ inst!(inst_sla_e, 8, 2),
        /* 24 */ inst!(inst_sla_h, 8, 2),
        /* 25 */ inst!(inst_sla_l, 8, 2),
        /* 26 */ inst!(inst_sla_mem_hl, 15, 2),
        /* 27 */ inst!(inst_sla_a, 8, 2),
        /* 28 */ inst!(inst_sra_b, 8, 2),
        /* 29 */ inst!(inst_sra_c, 8, 2),
        /* 2A */ inst!(inst_sra_d, 8, 2),
        /* 2B */ inst!(inst_sra_e, 8, 2),
        /* 2C */ inst!(inst_sra_h, 8, 2),
        /* 2D */ inst!(inst_sra_l, 8, 2),
        /* 2E */ inst!(inst_sra_mem_hl, 15, 2),
        /* 2F */ inst!(inst_sra_a, 8, 2),
        /* 30 */ inst!(inst_sll_b, 8, 2),
        /* 31 */ inst!(inst_sll_c, 8, 2),
        /* 32 */ inst!(inst_sll_d, 8, 2),
        /* 33 */ inst!(inst_sll_e, 8, 2),
        /* 34 */ inst!(inst_sll_h, 8, 2),
        /* 35 */ inst!(inst_sll_l, 8, 2),
        /* 36 */ inst!(inst_sll_mem_hl, 15, 2),
        /* 37 */ inst!(inst_sll_a, 8, 2),
        /* 38 */ inst!(inst_srl_b, 8, 2),
        /* 39 */ inst!(inst_srl_c, 8, 2),
        /* 3A */ inst!(inst_srl_d, 8, 2),
        /* 3B */ inst!(inst_srl_e, 8, 2),
        /* 3C */ inst!(inst_srl_h, 8, 2),
        /* 3D */ inst!(inst_srl_l, 8, 2),
        /* 3E */ inst!(inst_srl_mem_hl, 15, 2),
        /* 3F */ inst!(inst_srl_a, 8, 2),
        /* 40 */ inst!(inst_bit_0_b, 8, 2),
        /* 41 */ inst!(inst_bit_0_c, 8, 2),
        /* 42 */ inst!(inst_bit_0_d, 8, 2),
        /* 43 */ inst!(inst_bit_0_e, 8, 2),
        /* 44 */ inst!(inst_bit_0_h, 8, 2),
        /* 45 */ inst!(inst_bit_0_l, 8, 2),
        /* 46 */ inst!(inst_bit_0_mem_hl, 12, 2),
        /* 47 */ inst!(inst_bit_0_a, 8, 2),
        /* 48 */ inst!(inst_bit_1_b, 8, 2),
        /* 49 */ inst!(inst_bit_1_c, 8, 2),
        /* 4A */ inst!(inst_bit_1_d, 8, 2),
        /* 4B */ inst!(inst_bit_1_e, 8, 2),
        /* 4C */ inst!(inst_bit_1_h, 8, 2),
        /* 4D */ inst!(inst_bit_1_l, 8, 2),
        /* 4E */ inst!(inst_bit_1_mem_hl, 12, 2),
        /* 4F */ inst!(inst_bit_1_a, 8, 2),
        /* 50 */ inst!(inst_bit_2_b, 8, 2),
        /* 51 */ inst!(inst_bit_2_c, 8, 2),
        /* 52 */ inst!(inst_bit_2_d, 8, 2),
        /* 53 */ inst!(inst_bit_2_e, 8, 2),
        /* 54 */ inst!(inst_bit_2_h, 8, 2),
        /* 55 */ inst!(inst_bit_2_l, 8, 2),
        /* 56 */ inst!(inst_bit_2_mem_hl, 12, 2),
        /* 57 */ inst!(inst_bit_2_a, 8, 2),
        /* 58 */ inst!(inst_bit_3_b, 8, 2),
        /* 59 */ inst!(inst_bit_3_c, 8, 2),
        /* 5A */ inst!(inst_bit_3_d, 8, 2),
        /* 5B */ inst!(inst_bit_3_e, 8, 2),
        /* 5C */ inst!(inst_bit_3_h, 8, 2),
        /* 5D */ inst!(inst_bit_3_l, 8, 2),
        /* 5E */ inst!(inst_bit_3_mem_hl, 12, 2),
        /* 5F */ inst!(inst_bit_3_a, 8, 2),
        /* 60 */ inst!(inst_bit_4_b, 8, 2),
        /* 61 */ inst!(inst_bit_4_c, 8, 2),
        /* 62 */ inst!(inst_bit_4_d, 8, 2),
        /* 63 */ inst!(inst_bit_4_e, 8, 2),
        /* 64 */ inst!(inst_bit_4_h, 8, 2),
        /* 65 */ inst!(inst_bit_4_l, 8, 2),
        /* 66 */ inst!(inst_bit_4_mem_hl, 12, 2),
        /* 67 */ inst!(inst_bit_4_a, 8, 2),
        /* 68 */ inst!(inst_bit_5_b, 8, 2),
        /* 69 */ inst!(inst_bit_5_c, 8, 2),
        /* 6A */ inst!(inst_bit_5_d, 8, 2),
        /* 6B */ inst!(inst_bit_5_e, 8, 2),
        /* 6C */ inst!(inst_bit_5_h, 8, 2),
        /* 6D */ inst!(inst_bit_5_l, 8, 2),
        /* 6E */ inst!(inst_bit_5_mem_hl, 12, 2),
        /* 6F */ inst!(inst_bit_5_a, 8, 2),
        /* 70 */ inst!(inst_bit_6_b, 8, 2),
        /* 71 */ inst!(inst_bit_6_c, 8, 2),
        /* 72 */ inst!(inst_bit_6_d, 8, 2),
        /* 73 */ inst!(inst_bit_6_e, 8, 2),
        /* 74 */ inst!(inst_bit_6_h, 8, 2),
        /* 75 */ inst!(inst_bit_6_l, 8, 2),
        /* 76 */ inst!(inst_bit_6_mem_hl, 12, 2),
        /* 77 */ inst!(inst_bit_6_a, 8, 2),
        /* 78 */ inst!(inst_bit_7_b, 8, 2),
        /* 79 */ inst!(inst_bit_7_c, 8, 2),
        /* 7A */ inst!(inst_bit_7_d, 8, 2),
        /* 7B */ inst!(inst_bit_7_e, 8, 2),
        /* 7C */ inst!(inst_bit_7_h, 8, 2),
        /* 7D */ inst!(inst_bit_7_l, 8, 2),
        /* 7E */ inst!(inst_bit_7_mem_hl, 12, 2),
        /* 7F */ inst!(inst_bit_7_a, 8, 2),
        /* 80 */ inst!(inst_res_0_b, 8, 2),
        /* 81 */ inst!(inst_res_0_c, 8, 2),
        /* 82 */ inst!(inst_res_0_d, 8, 2),
        /* 83 */ inst!(inst_res_0_e, 8, 2),
        /* 84 */ inst!(inst_res_0_h, 8, 2),
        /* 85 */ inst!(inst_res_0_l, 8, 2),
        /* 86 */ inst!(inst_res_0_mem_hl, 15, 2),
        /* 87 */ inst!(inst_res_0_a, 8, 2),
        /* 88 */ inst!(inst_res_1_b, 8, 2),
        /* 89 */ inst!(inst_res_1_c, 8, 2),
        /* 8A */ inst!(inst_res_1_d, 8, 2),
        /* 8B */ inst!(inst_res_1_e, 8, 2),
        /* 8C */ inst!(inst_res_1_h, 8, 2),
        /* 8D */ inst!(inst_res_1_l, 8, 2),
        /* 8E */ inst!(inst_res_1_mem_hl, 15, 2),
        /* 8F */ inst!(inst_res_1_a, 8, 2),
        /* 90 */ inst!(inst_res_2_b, 8, 2),
        /* 91 */ inst!(inst_res_2_c, 8, 2),
        /* 92 */ inst!(inst_res_2_d, 8, 2),
        /* 93 */ inst!(inst_res_2_e, 8, 2),
        /* 94 */ inst!(inst_res_2_h, 8, 2),
        /* 95 */ inst!(inst_res_2_l, 8, 2),
        /* 96 */ inst!(inst_res_2_mem_hl, 15, 2),
        /* 97 */ inst!(inst_res_2_a, 8, 2),
        /* 98 */ inst!(inst_res_3_b, 8, 2),
        /* 99 */ inst!(inst_res_3_c, 8, 2),
        /* 9A */ inst!(inst_res_3_d, 8, 2),
        /* 9B */ inst!(inst_res_3_e, 8, 2),
        /* 9C */ inst!(inst_res_3_h, 8, 2),
        /* 9D */ inst!(inst_res_3_l, 8, 2),
        /* 9E */ inst!(inst_res_3_mem_hl, 15, 2),
        /* 9F */ inst!(inst_res_3_a, 8, 2),
        /* A0 */ inst!(inst_res_4_b, 8, 2),
        /* A1 */ inst!(inst_res_4_c, 8, 2),
        /* A2 */ inst!(inst_res_4_d, 8, 2),
        /* A3 */ inst!(inst_res_4_e, 8, 2),
        /* A4 */ inst!(inst_res_4_h, 8, 2),
        /* A5 */ inst!(inst_res_4_l, 8, 2),
        /* A6 */ inst!(inst_res_4_mem_hl, 15, 2),
        /* A7 */ inst!(inst_res_4_a, 8, 2),
        /* A8 */ inst!(inst_res_5_b, 8, 2),
        /* A9 */ inst!(inst_res_5_c, 8, 2),
        /* AA */ inst!(inst_res_5_d, 8, 2),
        /* AB */ inst!(inst_res_5_e, 8, 2),
        /* AC */ inst!(inst_res_5_h, 8, 2),
        /* AD */ inst!(inst_res_5_l, 8, 2),
        /* AE */ inst!(inst_res_5_mem_hl, 15, 2),
        /* AF */ inst!(inst_res_5_a, 8, 2),
        /* B0 */ inst!(inst_res_6_b, 8, 2),
        /* B1 */ inst!(inst_res_6_c, 8, 2),
        /* B2 */ inst!(inst_res_6_d, 8, 2),
        /* B3 */ inst!(inst_res_6_e, 8, 2),
        /* B4 */ inst!(inst_res_6_h, 8, 2),
        /* B5 */ inst!(inst_res_6_l, 8, 2),
        /* B6 */ inst!(inst_res_6_mem_hl, 15, 2),
        /* B7 */ inst!(inst_res_6_a, 8, 2),
        /* B8 */ inst!(inst_res_7_b, 8, 2),
        /* B9 */ inst!(inst_res_7_c, 8, 2),
        /* BA */ inst!(inst_res_7_d, 8, 2),
        /* BB */ inst!(inst_res_7_e, 8, 2),
        /* BC */ inst!(inst_res_7_h, 8, 2),
        /* BD */ inst!(inst_res_7_l, 8, 2),
        /* BE */ inst!(inst_res_7_mem_hl, 15, 2),
        /* BF */ inst!(inst_res_7_a, 8, 2),
        /* C0 */ inst!(inst_set_0_b, 8, 2),
        /* C1 */ inst!(inst_set_0_c, 8, 2),
        /* C2 */ inst!(inst_set_0_d, 8, 2),
        /* C3 */ inst!(inst_set_0_e, 8, 2),
        /* C4 */ inst!(inst_set_0_h, 8, 2),
        /* C5 */ inst!(inst_set_0_l, 8, 2),
        /* C6 */ inst!(inst_set_0_mem_hl, 15, 2),
        /* C7 */ inst!(inst_set_0_a, 8, 2),
        /* C8 */ inst!(inst_set_1_b, 8, 2),
        /* C9 */ inst!(inst_set_1_c, 8, 2),
        /* CA */ inst!(inst_set_1_d, 8, 2),
        /* CB */ inst!(inst_set_1_e, 8, 2),
        /* CC */ inst!(inst_set_1_h, 8, 2),
        /* CD */ inst!(inst_set_1_l, 8, 2),
        /* CE */ inst!(inst_set_1_mem_hl, 15, 2),
        /* CF */ inst!(inst_set_1_a, 8, 2),
        /* D0 */ inst!(inst_set_2_b, 8, 2),
        /* D1 */ inst!(inst_set_2_c, 8, 2),
        /* D2 */ inst!(inst_set_2_d, 8, 2),
        /* D3 */ inst!(inst_set_2_e, 8, 2),
        /* D4 */ inst!(inst_set_2_h, 8, 2),
        /* D5 */ inst!(inst_set_2_l, 8, 2),
        /* D6 */ inst!(inst_set_2_mem_hl, 15, 2),
        /* D7 */ inst!(inst_set_2_a, 8, 2),
        /* D8 */ inst!(inst_set_3_b, 8, 2),
        /* D9 */ inst!(inst_set_3_c, 8, 2),
        /* DA */ inst!(inst_set_3_d, 8, 2),
        /* DB */ inst!(inst_set_3_e, 8, 2),
        /* DC */ inst!(inst_set_3_h, 8, 2),
        /* DD */ inst!(inst_set_3_l, 8, 2),
        /* DE */ inst!(inst_set_3_mem_hl, 15, 2),
        /* DF */ inst!(inst_set_3_a, 8, 2),
        /* E0 */ inst!(inst_set_4_b, 8, 2),
        /* E1 */ inst!(inst_set_4_c, 8, 2),
        /* E2 */ inst!(inst_set_4_d, 8, 2),
        /* E3 */ inst!(inst_set_4_e, 8, 2),
        /* E4 */ inst!(inst_set_4_h, 8, 2),
        /* E5 */ inst!(inst_set_4_l, 8, 2),
        /* E6 */ inst!(inst_set_4_mem_hl, 15, 2),
        /* E7 */ inst!(inst_set_4_a, 8, 2),
        /* E8 */ inst!(inst_set_5_b, 8, 2),
        /* E9 */ inst!(inst_set_5_c, 8, 2),
        /* EA */ inst!(inst_set_5_d, 8, 2),
        /* EB */ inst!(inst_set_5_e, 8, 2),
        /* EC */ inst!(inst_set_5_h, 8, 2),
        /* ED */ inst!(inst_set_5_l, 8, 2),
        /* EE */ inst!(inst_set_5_mem_hl, 15, 2),
        /* EF */ inst!(inst_set_5_a, 8, 2),
        /* F0 */ inst!(inst_set_6_b, 8, 2),
        /* F1 */ inst!(inst_set_6_c, 8, 2),
        /* F2 */ inst!(inst_set_6_d, 8, 2),
        /* F3 */ inst!(inst_set_6_e, 8, 2),
        /* F4 */ inst!(inst_set_6_h, 8, 2),
        /* F5 */ inst!(inst_set_6_l, 8, 2),
        /* F6 */ inst!(inst_set_6_mem_hl, 15, 2),
        /* F7 */ inst!(inst_set_6_a, 8, 2),
        /* F8 */ inst!(inst_set_7_b, 8, 2),
        /* F9 */ inst!(inst_set_7_c, 8, 2),
        /* FA */ inst!(inst_set_7_d, 8, 2),
        /* FB */ inst!(inst_set_7_e, 8, 2),
        /* FC */ inst!(inst_set_7_h, 8, 2),
        /* FD */ inst!(inst_set_7_l, 8, 2),
        /* FE */ inst!(inst_set_7_mem_hl, 15, 2),
        /* FF */ inst!(inst_set_7_a, 8, 2),
    ],
    // The dd-prefixed (IX) instructions; one-byte entries mark the
    // opcodes the prefix has no hold over:
    ix: [
        /* 00 */ inst!(inst_nop1, 4, 1),
        /* 01 */ inst!(inst_nop1, 4, 1),
        /* 02 */ inst!(inst_nop1, 4, 1),
        /* 03 */ inst!(inst_nop1, 4, 1),
        /* 04 */ inst!(inst_nop1, 4, 1),
        /* 05 */ inst!(inst_nop1, 4, 1),
        /* 06 */ inst!(inst_nop1, 4, 1),
        /* 07 */ inst!(inst_nop1, 4, 1),
        /* 08 */ inst!(inst_nop1, 4, 1),
        /* 09 */ inst!(inst_add_ix_bc, 15, 2),
        /* 0A */ inst!(inst_nop1, 4, 1),
        /* 0B */ inst!(inst_nop1, 4, 1),
        /* 0C */ inst!(inst_nop1, 4, 1),
        /* 0D */ inst!(inst_nop1, 4, 1),
        /* 0E */ inst!(inst_nop1, 4, 1),
        /* 0F */ inst!(inst_nop1, 4, 1),
        /* 10 */ inst!(inst_nop1, 4, 1),
        /* 11 */ inst!(inst_nop1, 4, 1),
        /* 12 */ inst!(inst_nop1, 4, 1),
        /* 13 */ inst!(inst_nop1, 4, 1),
        /* 14 */ inst!(inst_nop1, 4, 1),
        /* 15 */ inst!(inst_nop1, 4, 1),
        /* 16 */ inst!(inst_nop1, 4, 1),
        /* 17 */ inst!(inst_nop1, 4, 1),
        /* 18 */ inst!(inst_nop1, 4, 1),
        /* 19 */ inst!(inst_add_ix_de, 15, 2),
        /* 1A */ inst!(inst_nop1, 4, 1),
        /* 1B */ inst!(inst_nop1, 4, 1),
        /* 1C */ inst!(inst_nop1, 4, 1),
        /* 1D */ inst!(inst_nop1, 4, 1),
        /* 1E */ inst!(inst_nop1, 4, 1),
        /* 1F */ inst!(inst_nop1, 4, 1),
        /* 20 */ inst!(inst_nop1, 4, 1),
        /* 21 */ inst!(inst_ld_ix_im16, 14, 4),
        /* 22 */ inst!(inst_ld_mem_im16_ix, 20, 4),
        /* 23 */ inst!(inst_inc_ix, 10, 2),
        /* 24 */ inst!(inst_inc_ixh, 8, 2),
        /* 25 */ inst!(inst_dec_ixh, 8, 2),
        /* 26 */ inst!(inst_ld_ixh_im8, 11, 3),
        /* 27 */ inst!(inst_nop1, 4, 1),
        /* 28 */ inst!(inst_nop1, 4, 1),
        /* 29 */ inst!(inst_add_ix_ix, 15, 2),
        /* 2A */ inst!(inst_ld_ix_mem_im16, 20, 4),
        /* 2B */ inst!(inst_dec_ix, 10, 2),
        /* 2C */ inst!(inst_inc_ixl, 8, 2),
        /* 2D */ inst!(inst_dec_ixl, 8, 2),
        /* 2E */ inst!(inst_ld_ixl_im8, 11, 3),
        /* 2F */ inst!(inst_nop1, 4, 1),
        /* 30 */ inst!(inst_nop1, 4, 1),
        /* 31 */ inst!(inst_nop1, 4, 1),
        /* 32 */ inst!(inst_nop1, 4, 1),
        /* 33 */ inst!(inst_nop1, 4, 1),
        /* 34 */ inst!(inst_inc_mem_ix_im8, 23, 3),
        /* 35 */ inst!(inst_dec_mem_ix_im8, 23, 3),
        /* 36 */ inst!(inst_ld_mem_ix_im8_im8, 19, 4),
        /* 37 */ inst!(inst_nop1, 4, 1),
        /* 38 */ inst!(inst_nop1, 4, 1),
        /* 39 */ inst!(inst_add_ix_sp, 15, 2),
        /* 3A */ inst!(inst_nop1, 4, 1),
        /* 3B */ inst!(inst_nop1, 4, 1),
        /* 3C */ inst!(inst_nop1, 4, 1),
        /* 3D */ inst!(inst_nop1, 4, 1),
        /* 3E */ inst!(inst_nop1, 4, 1),
        /* 3F */ inst!(inst_nop1, 4, 1),
        /* 40 */ inst!(inst_nop1, 4, 1),
        /* 41 */ inst!(inst_nop1, 4, 1),
        /* 42 */ inst!(inst_nop1, 4, 1),
        /* 43 */ inst!(inst_nop1, 4, 1),
        /* 44 */ inst!(inst_ld_b_ixh, 8, 2),
        /* 45 */ inst!(inst_ld_b_ixl, 8, 2),
        /* 46 */ inst!(inst_ld_b_mem_ix_im8, 19, 3),
        /* 47 */ inst!(inst_nop1, 4, 1),
        /* 48 */ inst!(inst_nop1, 4, 1),
        /* 49 */ inst!(inst_nop1, 4, 1),
        /* 4A */ inst!(inst_nop1, 4, 1),
        /* 4B */ inst!(inst_nop1, 4, 1),
        /* 4C */ inst!(inst_ld_c_ixh, 8, 2),
        /* 4D */ inst!(inst_ld_c_ixl, 8, 2),
        /* 4E */ inst!(inst_ld_c_mem_ix_im8, 19, 3),
        /* 4F */ inst!(inst_nop1, 4, 1),
        /* 50 */ inst!(inst_nop1, 4, 1),
        /* 51 */ inst!(inst_nop1, 4, 1),
        /* 52 */ inst!(inst_nop1, 4, 1),
        /* 53 */ inst!(inst_nop1, 4, 1),
        /* 54 */ inst!(inst_ld_d_ixh, 8, 2),
        /* 55 */ inst!(inst_ld_d_ixl, 8, 2),
        /* 56 */ inst!(inst_ld_d_mem_ix_im8, 19, 3),
        /* 57 */ inst!(inst_nop1, 4, 1),
        /* 58 */ inst!(inst_nop1, 4, 1),
        /* 59 */ inst!(inst_nop1, 4, 1),
        /* 5A */ inst!(inst_nop1, 4, 1),
        /* 5B */ inst!(inst_nop1, 4, 1),
        /* 5C */ inst!(inst_ld_e_ixh, 8, 2),
        /* 5D */ inst!(inst_ld_e_ixl, 8, 2),
        /* 5E */ inst!(inst_ld_e_mem_ix_im8, 19, 3),
        /* 5F */ inst!(inst_nop1, 4, 1),
        /* 60 */ inst!(inst_ld_ixh_b, 8, 2),
        /* 61 */ inst!(inst_ld_ixh_c, 8, 2),
        /* 62 */ inst!(inst_ld_ixh_d, 8, 2),
        /* 63 */ inst!(inst_ld_ixh_e, 8, 2),
        /* 64 */ inst!(inst_ld_ixh_ixh, 8, 2),
        /* 65 */ inst!(inst_ld_ixh_ixl, 8, 2),
        /* 66 */ inst!(inst_ld_h_mem_ix_im8, 19, 3),
        /* 67 */ inst!(inst_ld_ixh_a, 8, 2),
        /* 68 */ inst!(inst_ld_ixl_b, 8, 2),
        /* 69 */ inst!(inst_ld_ixl_c, 8, 2),
        /* 6A */ inst!(inst_ld_ixl_d, 8, 2),
        /* 6B */ inst!(inst_ld_ixl_e, 8, 2),
        /* 6C */ inst!(inst_ld_ixl_ixh, 8, 2),
        /* 6D */ inst!(inst_ld_ixl_ixl, 8, 2),
        /* 6E */ inst!(inst_ld_l_mem_ix_im8, 19, 3),
        /* 6F */ inst!(inst_ld_ixl_a, 8, 2),
        /* 70 */ inst!(inst_ld_mem_ix_im8_b, 19, 3),
        /* 71 */ inst!(inst_ld_mem_ix_im8_c, 19, 3),
        /* 72 */ inst!(inst_ld_mem_ix_im8_d, 19, 3),
        /* 73 */ inst!(inst_ld_mem_ix_im8_e, 19, 3),
        /* 74 */ inst!(inst_ld_mem_ix_im8_h, 19, 3),
        /* 75 */ inst!(inst_ld_mem_ix_im8_l, 19, 3),
        /* 76 */ inst!(inst_nop1, 4, 1),
        /* 77 */ inst!(inst_ld_mem_ix_im8_a, 19, 3),
        /* 78 */ inst!(inst_nop1, 4, 1),
        /* 79 */ inst!(inst_nop1, 4, 1),
        /* 7A */ inst!(inst_nop1, 4, 1),
        /* 7B */ inst!(inst_nop1, 4, 1),
        /* 7C */ inst!(inst_ld_a_ixh, 8, 2),
        /* 7D */ inst!(inst_ld_a_ixl, 8, 2),
        /* 7E */ inst!(inst_ld_a_mem_ix_im8, 19, 3),
        /* 7F */ inst!(inst_nop1, 4, 1),
        /* 80 */ inst!(inst_nop1, 4, 1),
        /* 81 */ inst!(inst_nop1, 4, 1),
        /* 82 */ inst!(inst_nop1, 4, 1),
        /* 83 */ inst!(inst_nop1, 4, 1),
        /* 84 */ inst!(inst_add_a_ixh, 8, 2),
        /* 85 */ inst!(inst_add_a_ixl, 8, 2),
        /* 86 */ inst!(inst_add_a_mem_ix_im8, 19, 3),
        /* 87 */ inst!(inst_nop1, 4, 1),
        /* 88 */ inst!(inst_nop1, 4, 1),
        /* 89 */ inst!(inst_nop1, 4, 1),
        /* 8A */ inst!(inst_nop1, 4, 1),
        /* 8B */ inst!(inst_nop1, 4, 1),
        /* 8C */ inst!(inst_adc_a_ixh, 8, 2),
        /* 8D */ inst!(inst_adc_a_ixl, 8, 2),
        /* 8E */ inst!(inst_adc_a_mem_ix_im8, 19, 3),
        /* 8F */ inst!(inst_nop1, 4, 1),
        /* 90 */ inst!(inst_nop1, 4, 1),
        /* 91 */ inst!(inst_nop1, 4, 1),
        /* 92 */ inst!(inst_nop1, 4, 1),
        /* 93 */ inst!(inst_nop1, 4, 1),
        /* 94 */ inst!(inst_sub_a_ixh, 8, 2),
        /* 95 */ inst!(inst_sub_a_ixl, 8, 2),
        /* 96 */ inst!(inst_sub_a_mem_ix_im8, 19, 3),
        /* 97 */ inst!(inst_nop1, 4, 1),
        /* 98 */ inst!(inst_nop1, 4, 1),
        /* 99 */ inst!(inst_nop1, 4, 1),
        /* 9A */ inst!(inst_nop1, 4, 1),
        /* 9B */ inst!(inst_nop1, 4, 1),
        /* 9C */ inst!(inst_sbc_a_ixh, 8, 2),
        /* 9D */ inst!(inst_sbc_a_ixl, 8, 2),
        /* 9E */ inst!(inst_sbc_a_mem_ix_im8, 19, 3),
        /* 9F */ inst!(inst_nop1, 4, 1),
        /* A0 */ inst!(inst_nop1, 4, 1),
        /* A1 */ inst!(inst_nop1, 4, 1),
        /* A2 */ inst!(inst_nop1, 4, 1),
        /* A3 */ inst!(inst_nop1, 4, 1),
        /* A4 */ inst!(inst_and_a_ixh, 8, 2),
        /* A5 */ inst!(inst_and_a_ixl, 8, 2),
        /* A6 */ inst!(inst_and_a_mem_ix_im8, 19, 3),
        /* A7 */ inst!(inst_nop1, 4, 1),
        /* A8 */ inst!(inst_nop1, 4, 1),
        /* A9 */ inst!(inst_nop1, 4, 1),
        /* AA */ inst!(inst_nop1, 4, 1),
        /* AB */ inst!(inst_nop1, 4, 1),
        /* AC */ inst!(inst_xor_a_ixh, 8, 2),
        /* AD */ inst!(inst_xor_a_ixl, 8, 2),
        /* AE */ inst!(inst_xor_a_mem_ix_im8, 19, 3),
        /* AF */ inst!(inst_nop1, 4, 1),
        /* B0 */ inst!(inst_nop1, 4, 1),
        /* B1 */ inst!(inst_nop1, 4, 1),
        /* B2 */ inst!(inst_nop1, 4, 1),
        /* B3 */ inst!(inst_nop1, 4, 1),
        /* B4 */ inst!(inst_or_a_ixh, 8, 2),
        /* B5 */ inst!(inst_or_a_ixl, 8, 2),
        /* B6 */ inst!(inst_or_a_mem_ix_im8, 19, 3),
        /* B7 */ inst!(inst_nop1, 4, 1),
        /* B8 */ inst!(inst_nop1, 4, 1),
        /* B9 */ inst!(inst_nop1, 4, 1),
        /* BA */ inst!(inst_nop1, 4, 1),
        /* BB */ inst!(inst_nop1, 4, 1),
        /* BC */ inst!(inst_cp_a_ixh, 8, 2),
        /* BD */ inst!(inst_cp_a_ixl, 8, 2),
        /* BE */ inst!(inst_cp_a_mem_ix_im8, 19, 3),
        /* BF */ inst!(inst_nop1, 4, 1),
        /* C0 */ inst!(inst_nop1, 4, 1),
        /* C1 */ inst!(inst_nop1, 4, 1),
        /* C2 */ inst!(inst_nop1, 4, 1),
        /* C3 */ inst!(inst_nop1, 4, 1),
        /* C4 */ inst!(inst_nop1, 4, 1),
        /* C5 */ inst!(inst_nop1, 4, 1),
        /* C6 */ inst!(inst_nop1, 4, 1),
        /* C7 */ inst!(inst_nop1, 4, 1),
        /* C8 */ inst!(inst_nop1, 4, 1),
        /* C9 */ inst!(inst_nop1, 4, 1),
        /* CA */ inst!(inst_nop1, 4, 1),
        /* CB */ inst!(inst_nop1, 4, 1),
        /* CC */ inst!(inst_nop1, 4, 1),
        /* CD */ inst!(inst_nop1, 4, 1),
        /* CE */ inst!(inst_nop1, 4, 1),
        /* CF */ inst!(inst_nop1, 4, 1),
        /* D0 */ inst!(inst_nop1, 4, 1),
        /* D1 */ inst!(inst_nop1, 4, 1),
        /* D2 */ inst!(inst_nop1, 4, 1),
        /* D3 */ inst!(inst_nop1, 4, 1),
        /* D4 */ inst!(inst_nop1, 4, 1),
        /* D5 */ inst!(inst_nop1, 4, 1),
        /* D6 */ inst!(inst_nop1, 4, 1),
        /* D7 */ inst!(inst_nop1, 4, 1),
        /* D8 */ inst!(inst_nop1, 4, 1),
        /* D9 */ inst!(inst_nop1, 4, 1),
        /* DA */ inst!(inst_nop1, 4, 1),
        /* DB */ inst!(inst_nop1, 4, 1),
        /* DC */ inst!(inst_nop1, 4, 1),
        /* DD */ inst!(inst_nop1, 4, 1),
        /* DE */ inst!(inst_nop1, 4, 1),
        /* DF */ inst!(inst_nop1, 4, 1),
        /* E0 */ inst!(inst_nop1, 4, 1),
        /* E1 */ inst!(inst_pop_ix, 14, 2),
        /* E2 */ inst!(inst_nop1, 4, 1),
        /* E3 */ inst!(inst_ex_mem_sp_ix, 23, 2),
        /* E4 */ inst!(inst_nop1, 4, 1),
        /* E5 */ inst!(inst_push_ix, 15, 2),
        /* E6 */ inst!(inst_nop1, 4, 1),
        /* E7 */ inst!(inst_nop1, 4, 1),
        /* E8 */ inst!(inst_nop1, 4, 1),
        /* E9 */ inst!(inst_jp_ix, 8, 2),
        /* EA */ inst!(inst_nop1, 4, 1),
        /* EB */ inst!(inst_nop1, 4, 1),
        /* EC */ inst!(inst_nop1, 4, 1),
        /* ED */ inst!(inst_nop1, 4, 1),
        /* EE */ inst!(inst_nop1, 4, 1),
        /* EF */ inst!(inst_nop1, 4, 1),
        /* F0 */ inst!(inst_nop1, 4, 1),
        /* F1 */ inst!(inst_nop1, 4, 1),
        /* F2 */ inst!(inst_nop1, 4, 1),
        /* F3 */ inst!(inst_nop1, 4, 1),
        /* F4 */ inst!(inst_nop1, 4, 1),
        /* F5 */ inst!(inst_nop1, 4, 1),
        /* F6 */ inst!(inst_nop1, 4, 1),
        /* F7 */ inst!(inst_nop1, 4, 1),
        /* F8 */ inst!(inst_nop1, 4, 1),
        /* F9 */ inst!(inst_ld_sp_ix, 10, 2),
        /* FA */ inst!(inst_nop1, 4, 1),
        /* FB */ inst!(inst_nop1, 4, 1),
        /* FC */ inst!(inst_nop1, 4, 1),
        /* FD */ inst!(inst_nop1, 4, 1),
        /* FE */ inst!(inst_nop1, 4, 1),
        /* FF */ inst!(inst_nop1, 4, 1),
    ],
    // The ddcb-prefixed (IX+d) bit manipulation instructions:
    ix_bit: [
        /* 00 */ inst!(inst_rlc_mem_ix_im8_b, 23, 4),
        /* 01 */ inst!(inst_rlc_mem_ix_im8_c, 23, 4),
        /* 02 */ inst!(inst_rlc_mem_ix_im8_d, 23, 4),
        /* 03 */ inst!(inst_rlc_mem_ix_im8_e, 23, 4),
        /* 04 */ inst!(inst_rlc_mem_ix_im8_h, 23, 4),
        /* 05 */ inst!(inst_rlc_mem_ix_im8_l, 23, 4),
        /* 06 */ inst!(inst_rlc_mem_ix_im8, 23, 4),
        /* 07 */ inst!(inst_rlc_mem_ix_im8_a, 23, 4),
        /* 08 */ inst!(inst_rrc_mem_ix_im8_b, 23, 4),
        /* 09 */ inst!(inst_rrc_mem_ix_im8_c, 23, 4),
        /* 0A */ inst!(inst_rrc_mem_ix_im8_d, 23, 4),
        /* 0B */ inst!(inst_rrc_mem_ix_im8_e, 23, 4),
        /* 0C */ inst!(inst_rrc_mem_ix_im8_h, 23, 4),
        /* 0D */ inst!(inst_rrc_mem_ix_im8_l, 23, 4),
        /* 0E */ inst!(inst_rrc_mem_ix_im8, 23, 4),
        /* 0F */ inst!(inst_rrc_mem_ix_im8_a, 23, 4),
        /* 10 */ inst!(inst_rl_mem_ix_im8_b, 23, 4),
        /* 11 */ inst!(inst_rl_mem_ix_im8_c, 23, 4),
        /* 12 */ inst!(inst_rl_mem_ix_im8_d, 23, 4),
        /* 13 */ inst!(inst_rl_mem_ix_im8_e, 23, 4),
        /* 14 */ inst!(inst_rl_mem_ix_im8_h, 23, 4),
        /* 15 */ inst!(inst_rl_mem_ix_im8_l, 23, 4),
        /* 16 */ inst!(inst_rl_mem_ix_im8, 23, 4),
        /* 17 */ inst!(inst_rl_mem_ix_im8_a, 23, 4),
        /* 18 */ inst!(inst_rr_mem_ix_im8_b, 23, 4),
        /* 19 */ inst!(inst_rr_mem_ix_im8_c, 23, 4),
        /* 1A */ inst!(inst_rr_mem_ix_im8_d, 23, 4),
        /* 1B */ inst!(inst_rr_mem_ix_im8_e, 23, 4),
        /* 1C */ inst!(inst_rr_mem_ix_im8_h, 23, 4),
        /* 1D */ inst!(inst_rr_mem_ix_im8_l, 23, 4),
        /* 1E */ inst!(inst_rr_mem_ix_im8, 23, 4),
        /* 1F */ inst!(inst_rr_mem_ix_im8_a, 23, 4),
        /* 20 */ inst!(inst_sla_mem_ix_im8_b, 23, 4),
        /* 21 */ inst!(inst_sla_mem_ix_im8_c, 23, 4),
        /* 22 */ inst!(inst_sla_mem_ix_im8_d, 23, 4),
        /* 23 */ inst!(inst_sla_mem_ix_im8_e, 23, 4),
        /* 24 */ inst!(inst_sla_mem_ix_im8_h, 23, 4),
        /* 25 */ inst!(inst_sla_mem_ix_im8_l, 23, 4),
        /* 26 */ inst!(inst_sla_mem_ix_im8, 23, 4),
        /* 27 */ inst!(inst_sla_mem_ix_im8_a, 23, 4),
        /* 28 */ inst!(inst_sra_mem_ix_im8_b, 23, 4),
        /* 29 */ inst!(inst_sra_mem_ix_im8_c, 23, 4),
        /* 2A */ inst!(inst_sra_mem_ix_im8_d, 23, 4),
        /* 2B */ inst!(inst_sra_mem_ix_im8_e, 23, 4),
        /* 2C */ inst!(inst_sra_mem_ix_im8_h, 23, 4),
        /* 2D */ inst!(inst_sra_mem_ix_im8_l, 23, 4),
        /* 2E */ inst!(inst_sra_mem_ix_im8, 23, 4),
        /* 2F */ inst!(inst_sra_mem_ix_im8_a, 23, 4),
        /* 30 */ inst!(inst_sll_mem_ix_im8_b, 23, 4),
        /* 31 */ inst!(inst_sll_mem_ix_im8_c, 23, 4),
        /* 32 */ inst!(inst_sll_mem_ix_im8_d, 23, 4),
        /* 33 */ inst!(inst_sll_mem_ix_im8_e, 23, 4),
        /* 34 */ inst!(inst_sll_mem_ix_im8_h, 23, 4),
        /* 35 */ inst!(inst_sll_mem_ix_im8_l, 23, 4),
        /* 36 */ inst!(inst_sll_mem_ix_im8, 23, 4),
        /* 37 */ inst!(inst_sll_mem_ix_im8_a, 23, 4),
        /* 38 */ inst!(inst_srl_mem_ix_im8_b, 23, 4),
        /* 39 */ inst!(inst_srl_mem_ix_im8_c, 23, 4),
        /* 3A */ inst!(inst_srl_mem_ix_im8_d, 23, 4),
        /* 3B */ inst!(inst_srl_mem_ix_im8_e, 23, 4),
        /* 3C */ inst!(inst_srl_mem_ix_im8_h, 23, 4),
        /* 3D */ inst!(inst_srl_mem_ix_im8_l, 23, 4),
        /* 3E */ inst!(inst_srl_mem_ix_im8, 23, 4),
        /* 3F */ inst!(inst_srl_mem_ix_im8_a, 23, 4),
        /* 40 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 41 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 42 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 43 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 44 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 45 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 46 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 47 */ inst!(inst_bit_0_mem_ix_im8, 20, 4),
        /* 48 */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 49 */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4A */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4B */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4C */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4D */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4E */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 4F */ inst!(inst_bit_1_mem_ix_im8, 20, 4),
        /* 50 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 51 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 52 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 53 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 54 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 55 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 56 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 57 */ inst!(inst_bit_2_mem_ix_im8, 20, 4),
        /* 58 */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 59 */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5A */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5B */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5C */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5D */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5E */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 5F */ inst!(inst_bit_3_mem_ix_im8, 20, 4),
        /* 60 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 61 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 62 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 63 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 64 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 65 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 66 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 67 */ inst!(inst_bit_4_mem_ix_im8, 20, 4),
        /* 68 */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 69 */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6A */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6B */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6C */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6D */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6E */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 6F */ inst!(inst_bit_5_mem_ix_im8, 20, 4),
        /* 70 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 71 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 72 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 73 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 74 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 75 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 76 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 77 */ inst!(inst_bit_6_mem_ix_im8, 20, 4),
        /* 78 */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 79 */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7A */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7B */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7C */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7D */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7E */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 7F */ inst!(inst_bit_7_mem_ix_im8, 20, 4),
        /* 80 */ inst!(inst_res_0_mem_ix_im8_b, 23, 4),
        /* 81 */ inst!(inst_res_0_mem_ix_im8_c, 23, 4),
        /* 82 */ inst!(inst_res_0_mem_ix_im8_d, 23, 4),
        /* 83 */ inst!(inst_res_0_mem_ix_im8_e, 23, 4),
        /* 84 */ inst!(inst_res_0_mem_ix_im8_h, 23, 4),
        /* 85 */ inst!(inst_res_0_mem_ix_im8_l, 23, 4),
        /* 86 */ inst!(inst_res_0_mem_ix_im8, 23, 4),
        /* 87 */ inst!(inst_res_0_mem_ix_im8_a, 23, 4),
        /* 88 */ inst!(inst_res_1_mem_ix_im8_b, 23, 4),
        /* 89 */ inst!(inst_res_1_mem_ix_im8_c, 23, 4),
        /* 8A */ inst!(inst_res_1_mem_ix_im8_d, 23, 4),
        /* 8B */ inst!(inst_res_1_mem_ix_im8_e, 23, 4),
        /* 8C */ inst!(inst_res_1_mem_ix_im8_h, 23, 4),
        /* 8D */ inst!(inst_res_1_mem_ix_im8_l, 23, 4),
        /* 8E */ inst!(inst_res_1_mem_ix_im8, 23, 4),
        /* 8F */ inst!(inst_res_1_mem_ix_im8_a, 23, 4),
        /* 90 */ inst!(inst_res_2_mem_ix_im8_b, 23, 4),
        /* 91 */ inst!(inst_res_2_mem_ix_im8_c, 23, 4),
        /* 92 */ inst!(inst_res_2_mem_ix_im8_d, 23, 4),
        /* 93 */ inst!(inst_res_2_mem_ix_im8_e, 23, 4),
        /* 94 */ inst!(inst_res_2_mem_ix_im8_h, 23, 4),
        /* 95 */ inst!(inst_res_2_mem_ix_im8_l, 23, 4),
        /* 96 */ inst!(inst_res_2_mem_ix_im8, 23, 4),
        /* 97 */ inst!(inst_res_2_mem_ix_im8_a, 23, 4),
        /* 98 */ inst!(inst_res_3_mem_ix_im8_b, 23, 4),
        /* 99 */ inst!(inst_res_3_mem_ix_im8_c, 23, 4),
        /* 9A */ inst!(inst_res_3_mem_ix_im8_d, 23, 4),
        /* 9B */ inst!(inst_res_3_mem_ix_im8_e, 23, 4),
        /* 9C */ inst!(inst_res_3_mem_ix_im8_h, 23, 4),
        /* 9D */ inst!(inst_res_3_mem_ix_im8_l, 23, 4),
        /* 9E */ inst!(inst_res_3_mem_ix_im8, 23, 4),
        /* 9F */ inst!(inst_res_3_mem_ix_im8_a, 23, 4),
        /* A0 */ inst!(inst_res_4_mem_ix_im8_b, 23, 4),
        /* A1 */ inst!(inst_res_4_mem_ix_im8_c, 23, 4),
        /* A2 */ inst!(inst_res_4_mem_ix_im8_d, 23, 4),
        /* A3 */ inst!(inst_res_4_mem_ix_im8_e, 23, 4),
        /* A4 */ inst!(inst_res_4_mem_ix_im8_h, 23, 4),
        /* A5 */ inst!(inst_res_4_mem_ix_im8_l, 23, 4),
        /* A6 */ inst!(inst_res_4_mem_ix_im8, 23, 4),
        /* A7 */ inst!(inst_res_4_mem_ix_im8_a, 23, 4),
        /* A8 */ inst!(inst_res_5_mem_ix_im8_b, 23, 4),
        /* A9 */ inst!(inst_res_5_mem_ix_im8_c, 23, 4),
        /* AA */ inst!(inst_res_5_mem_ix_im8_d, 23, 4),
        /* AB */ inst!(inst_res_5_mem_ix_im8_e, 23, 4),
        /* AC */ inst!(inst_res_5_mem_ix_im8_h, 23, 4),
        /* AD */ inst!(inst_res_5_mem_ix_im8_l, 23, 4),
        /* AE */ inst!(inst_res_5_mem_ix_im8, 23, 4),
        /* AF */ inst!(inst_res_5_mem_ix_im8_a, 23, 4),
        /* B0 */ inst!(inst_res_6_mem_ix_im8_b, 23, 4),
        /* B1 */ inst!(inst_res_6_mem_ix_im8_c, 23, 4),
        /* B2 */ inst!(inst_res_6_mem_ix_im8_d, 23, 4),
        /* B3 */ inst!(inst_res_6_mem_ix_im8_e, 23, 4),
        /* B4 */ inst!(inst_res_6_mem_ix_im8_h, 23, 4),
        /* B5 */ inst!(inst_res_6_mem_ix_im8_l, 23, 4),
        /* B6 */ inst!(inst_res_6_mem_ix_im8, 23, 4),
        /* B7 */ inst!(inst_res_6_mem_ix_im8_a, 23, 4),
        /* B8 */ inst!(inst_res_7_mem_ix_im8_b, 23, 4),
        /* B9 */ inst!(inst_res_7_mem_ix_im8_c, 23, 4),
        /* BA */ inst!(inst_res_7_mem_ix_im8_d, 23, 4),
        /* BB */ inst!(inst_res_7_mem_ix_im8_e, 23, 4),
        /* BC */ inst!(inst_res_7_mem_ix_im8_h, 23, 4),
        /* BD */ inst!(inst_res_7_mem_ix_im8_l, 23, 4),
        /* BE */ inst!(inst_res_7_mem_ix_im8, 23, 4),
        /* BF */ inst!(inst_res_7_mem_ix_im8_a, 23, 4),
        /* C0 */ inst!(inst_set_0_mem_ix_im8_b, 23, 4),
        /* C1 */ inst!(inst_set_0_mem_ix_im8_c, 23, 4),
        /* C2 */ inst!(inst_set_0_mem_ix_im8_d, 23, 4),
        /* C3 */ inst!(inst_set_0_mem_ix_im8_e, 23, 4),
        /* C4 */ inst!(inst_set_0_mem_ix_im8_h, 23, 4),
        /* C5 */ inst!(inst_set_0_mem_ix_im8_l, 23, 4),
        /* C6 */ inst!(inst_set_0_mem_ix_im8, 23, 4),
        /* C7 */ inst!(inst_set_0_mem_ix_im8_a, 23, 4),
        /* C8 */ inst!(inst_set_1_mem_ix_im8_b, 23, 4),
        /* C9 */ inst!(inst_set_1_mem_ix_im8_c, 23, 4),
        /* CA */ inst!(inst_set_1_mem_ix_im8_d, 23, 4),
        /* CB */ inst!(inst_set_1_mem_ix_im8_e, 23, 4),
        /* CC */ inst!(inst_set_1_mem_ix_im8_h, 23, 4),
        /* CD */ inst!(inst_set_1_mem_ix_im8_l, 23, 4),
        /* CE */ inst!(inst_set_1_mem_ix_im8, 23, 4),
        /* CF */ inst!(inst_set_1_mem_ix_im8_a, 23, 4),
        /* D0 */ inst!(inst_set_2_mem_ix_im8_b, 23, 4),
        /* D1 */ inst!(inst_set_2_mem_ix_im8_c, 23, 4),
        /* D2 */ inst!(inst_set_2_mem_ix_im8_d, 23, 4),
        /* D3 */ inst!(inst_set_2_mem_ix_im8_e, 23, 4),
        /* D4 */ inst!(inst_set_2_mem_ix_im8_h, 23, 4),
        /* D5 */ inst!(inst_set_2_mem_ix_im8_l, 23, 4),
        /* D6 */ inst!(inst_set_2_mem_ix_im8, 23, 4),
        /* D7 */ inst!(inst_set_2_mem_ix_im8_a, 23, 4),
        /* D8 */ inst!(inst_set_3_mem_ix_im8_b, 23, 4),
        /* D9 */ inst!(inst_set_3_mem_ix_im8_c, 23, 4),
        /* DA */ inst!(inst_set_3_mem_ix_im8_d, 23, 4),
        /* DB */ inst!(inst_set_3_mem_ix_im8_e, 23, 4),
        /* DC */ inst!(inst_set_3_mem_ix_im8_h, 23, 4),
        /* DD */ inst!(inst_set_3_mem_ix_im8_l, 23, 4),
        /* DE */ inst!(inst_set_3_mem_ix_im8, 23, 4),
        /* DF */ inst!(inst_set_3_mem_ix_im8_a, 23, 4),
        /* E0 */ inst!(inst_set_4_mem_ix_im8_b, 23, 4),
        /* E1 */ inst!(inst_set_4_mem_ix_im8_c, 23, 4),
        /* E2 */ inst!(inst_set_4_mem_ix_im8_d, 23, 4),
        /* E3 */ inst!(inst_set_4_mem_ix_im8_e, 23, 4),
        /* E4 */ inst!(inst_set_4_mem_ix_im8_h, 23, 4),
        /* E5 */ inst!(inst_set_4_mem_ix_im8_l, 23, 4),
        /* E6 */ inst!(inst_set_4_mem_ix_im8, 23, 4),
        /* E7 */ inst!(inst_set_4_mem_ix_im8_a, 23, 4),
        /* E8 */ inst!(inst_set_5_mem_ix_im8_b, 23, 4),
        /* E9 */ inst!(inst_set_5_mem_ix_im8_c, 23, 4),
        /* EA */ inst!(inst_set_5_mem_ix_im8_d, 23, 4),
        /* EB */ inst!(inst_set_5_mem_ix_im8_e, 23, 4),
        /* EC */ inst!(inst_set_5_mem_ix_im8_h, 23, 4),
        /* ED */ inst!(inst_set_5_mem_ix_im8_l, 23, 4),
        /* EE */ inst!(inst_set_5_mem_ix_im8, 23, 4),
        /* EF */ inst!(inst_set_5_mem_ix_im8_a, 23, 4),
        /* F0 */ inst!(inst_set_6_mem_ix_im8_b, 23, 4),
        /* F1 */ inst!(inst_set_6_mem_ix_im8_c, 23, 4),
        /* F2 */ inst!(inst_set_6_mem_ix_im8_d, 23, 4),
        /* F3 */ inst!(inst_set_6_mem_ix_im8_e, 23, 4),
        /* F4 */ inst!(inst_set_6_mem_ix_im8_h, 23, 4),
        /* F5 */ inst!(inst_set_6_mem_ix_im8_l, 23, 4),
        /* F6 */ inst!(inst_set_6_mem_ix_im8, 23, 4),
        /* F7 */ inst!(inst_set_6_mem_ix_im8_a, 23, 4),
        /* F8 */ inst!(inst_set_7_mem_ix_im8_b, 23, 4),
        /* F9 */ inst!(inst_set_7_mem_ix_im8_c, 23, 4),
        /* FA */ inst!(inst_set_7_mem_ix_im8_d, 23, 4),
        /* FB */ inst!(inst_set_7_mem_ix_im8_e, 23, 4),
        /* FC */ inst!(inst_set_7_mem_ix_im8_h, 23, 4),
        /* FD */ inst!(inst_set_7_mem_ix_im8_l, 23, 4),
        /* FE */ inst!(inst_set_7_mem_ix_im8, 23, 4),
        /* FF */ inst!(inst_set_7_mem_ix_im8_a, 23, 4),
    ],
    // And the fd/fdcb mirrors of the above for IY:
    iy: [
        /* 00 */ inst!(inst_nop1, 4, 1),
        /* 01 */ inst!(inst_nop1, 4, 1),
        /* 02 */ inst!(inst_nop1, 4, 1),
        /* 03 */ inst!(inst_nop1, 4, 1),
        /* 04 */ inst!(inst_nop1, 4, 1),
        /* 05 */ inst!(inst_nop1, 4, 1),
        /* 06 */ inst!(inst_nop1, 4, 1),
        /* 07 */ inst!(inst_nop1, 4, 1),
        /* 08 */ inst!(inst_nop1, 4, 1),
        /* 09 */ inst!(inst_add_iy_bc, 15, 2),
        /* 0A */ inst!(inst_nop1, 4, 1),
        /* 0B */ inst!(inst_nop1, 4, 1),
        /* 0C */ inst!(inst_nop1, 4, 1),
        /* 0D */ inst!(inst_nop1, 4, 1),
        /* 0E */ inst!(inst_nop1, 4, 1),
        /* 0F */ inst!(inst_nop1, 4, 1),
        /* 10 */ inst!(inst_nop1, 4, 1),
        /* 11 */ inst!(inst_nop1, 4, 1),
        /* 12 */ inst!(inst_nop1, 4, 1),
        /* 13 */ inst!(inst_nop1, 4, 1),
        /* 14 */ inst!(inst_nop1, 4, 1),
        /* 15 */ inst!(inst_nop1, 4, 1),
        /* 16 */ inst!(inst_nop1, 4, 1),
        /* 17 */ inst!(inst_nop1, 4, 1),
        /* 18 */ inst!(inst_nop1, 4, 1),
        /* 19 */ inst!(inst_add_iy_de, 15, 2),
        /* 1A */ inst!(inst_nop1, 4, 1),
        /* 1B */ inst!(inst_nop1, 4, 1),
        /* 1C */ inst!(inst_nop1, 4, 1),
        /* 1D */ inst!(inst_nop1, 4, 1),
        /* 1E */ inst!(inst_nop1, 4, 1),
        /* 1F */ inst!(inst_nop1, 4, 1),
        /* 20 */ inst!(inst_nop1, 4, 1),
        /* 21 */ inst!(inst_ld_iy_im16, 14, 4),
        /* 22 */ inst!(inst_ld_mem_im16_iy, 20, 4),
        /* 23 */ inst!(inst_inc_iy, 10, 2),
        /* 24 */ inst!(inst_inc_iyh, 8, 2),
        /* 25 */ inst!(inst_dec_iyh, 8, 2),
        /* 26 */ inst!(inst_ld_iyh_im8, 11, 3),
        /* 27 */ inst!(inst_nop1, 4, 1),
        /* 28 */ inst!(inst_nop1, 4, 1),
        /* 29 */ inst!(inst_add_iy_iy, 15, 2),
        /* 2A */ inst!(inst_ld_iy_mem_im16, 20, 4),
        /* 2B */ inst!(inst_dec_iy, 10, 2),
        /* 2C */ inst!(inst_inc_iyl, 8, 2),
        /* 2D */ inst!(inst_dec_iyl, 8, 2),
        /* 2E */ inst!(inst_ld_iyl_im8, 11, 3),
        /* 2F */ inst!(inst_nop1, 4, 1),
        /* 30 */ inst!(inst_nop1, 4, 1),
        /* 31 */ inst!(inst_nop1, 4, 1),
        /* 32 */ inst!(inst_nop1, 4, 1),
        /* 33 */ inst!(inst_nop1, 4, 1),
        /* 34 */ inst!(inst_inc_mem_iy_im8, 23, 3),
        /* 35 */ inst!(inst_dec_mem_iy_im8, 23, 3),
        /* 36 */ inst!(inst_ld_mem_iy_im8_im8, 19, 4),
        /* 37 */ inst!(inst_nop1, 4, 1),
        /* 38 */ inst!(inst_nop1, 4, 1),
        /* 39 */ inst!(inst_add_iy_sp, 15, 2),
        /* 3A */ inst!(inst_nop1, 4, 1),
        /* 3B */ inst!(inst_nop1, 4, 1),
        /* 3C */ inst!(inst_nop1, 4, 1),
        /* 3D */ inst!(inst_nop1, 4, 1),
        /* 3E */ inst!(inst_nop1, 4, 1),
        /* 3F */ inst!(inst_nop1, 4, 1),
        /* 40 */ inst!(inst_nop1, 4, 1),
        /* 41 */ inst!(inst_nop1, 4, 1),
        /* 42 */ inst!(inst_nop1, 4, 1),
        /* 43 */ inst!(inst_nop1, 4, 1),
        /* 44 */ inst!(inst_ld_b_iyh, 8, 2),
        /* 45 */ inst!(inst_ld_b_iyl, 8, 2),
        /* 46 */ inst!(inst_ld_b_mem_iy_im8, 19, 3),
        /* 47 */ inst!(inst_nop1, 4, 1),
        /* 48 */ inst!(inst_nop1, 4, 1),
        /* 49 */ inst!(inst_nop1, 4, 1),
        /* 4A */ inst!(inst_nop1, 4, 1),
        /* 4B */ inst!(inst_nop1, 4, 1),
        /* 4C */ inst!(inst_ld_c_iyh, 8, 2),
        /* 4D */ inst!(inst_ld_c_iyl, 8, 2),
        /* 4E */ inst!(inst_ld_c_mem_iy_im8, 19, 3),
        /* 4F */ inst!(inst_nop1, 4, 1),
        /* 50 */ inst!(inst_nop1, 4, 1),
        /* 51 */ inst!(inst_nop1, 4, 1),
        /* 52 */ inst!(inst_nop1, 4, 1),
        /* 53 */ inst!(inst_nop1, 4, 1),
        /* 54 */ inst!(inst_ld_d_iyh, 8, 2),
        /* 55 */ inst!(inst_ld_d_iyl, 8, 2),
        /* 56 */ inst!(inst_ld_d_mem_iy_im8, 19, 3),
        /* 57 */ inst!(inst_nop1, 4, 1),
        /* 58 */ inst!(inst_nop1, 4, 1),
        /* 59 */ inst!(inst_nop1, 4, 1),
        /* 5A */ inst!(inst_nop1, 4, 1),
        /* 5B */ inst!(inst_nop1, 4, 1),
        /* 5C */ inst!(inst_ld_e_iyh, 8, 2),
        /* 5D */ inst!(inst_ld_e_iyl, 8, 2),
        /* 5E */ inst!(inst_ld_e_mem_iy_im8, 19, 3),
        /* 5F */ inst!(inst_nop1, 4, 1),
        /* 60 */ inst!(inst_ld_iyh_b, 8, 2),
        /* 61 */ inst!(inst_ld_iyh_c, 8, 2),
        /* 62 */ inst!(inst_ld_iyh_d, 8, 2),
        /* 63 */ inst!(inst_ld_iyh_e, 8, 2),
        /* 64 */ inst!(inst_ld_iyh_iyh, 8, 2),
        /* 65 */ inst!(inst_ld_iyh_iyl, 8, 2),
        /* 66 */ inst!(inst_ld_h_mem_iy_im8, 19, 3),
        /* 67 */ inst!(inst_ld_iyh_a, 8, 2),
        /* 68 */ inst!(inst_ld_iyl_b, 8, 2),
        /* 69 */ inst!(inst_ld_iyl_c, 8, 2),
        /* 6A */ inst!(inst_ld_iyl_d, 8, 2),
        /* 6B */ inst!(inst_ld_iyl_e, 8, 2),
        /* 6C */ inst!(inst_ld_iyl_iyh, 8, 2),
        /* 6D */ inst!(inst_ld_iyl_iyl, 8, 2),
        /* 6E */ inst!(inst_ld_l_mem_iy_im8, 19, 3),
        /* 6F */ inst!(inst_ld_iyl_a, 8, 2),
        /* 70 */ inst!(inst_ld_mem_iy_im8_b, 19, 3),
        /* 71 */ inst!(inst_ld_mem_iy_im8_c, 19, 3),
        /* 72 */ inst!(inst_ld_mem_iy_im8_d, 19, 3),
        /* 73 */ inst!(inst_ld_mem_iy_im8_e, 19, 3),
        /* 74 */ inst!(inst_ld_mem_iy_im8_h, 19, 3),
        /* 75 */ inst!(inst_ld_mem_iy_im8_l, 19, 3),
        /* 76 */ inst!(inst_nop1, 4, 1),
        /* 77 */ inst!(inst_ld_mem_iy_im8_a, 19, 3),
        /* 78 */ inst!(inst_nop1, 4, 1),
        /* 79 */ inst!(inst_nop1, 4, 1),
        /* 7A */ inst!(inst_nop1, 4, 1),
        /* 7B */ inst!(inst_nop1, 4, 1),
        /* 7C */ inst!(inst_ld_a_iyh, 8, 2),
        /* 7D */ inst!(inst_ld_a_iyl, 8, 2),
        /* 7E */ inst!(inst_ld_a_mem_iy_im8, 19, 3),
        /* 7F */ inst!(inst_nop1, 4, 1),
        /* 80 */ inst!(inst_nop1, 4, 1),
        /* 81 */ inst!(inst_nop1, 4, 1),
        /* 82 */ inst!(inst_nop1, 4, 1),
        /* 83 */ inst!(inst_nop1, 4, 1),
        /* 84 */ inst!(inst_add_a_iyh, 8, 2),
        /* 85 */ inst!(inst_add_a_iyl, 8, 2),
        /* 86 */ inst!(inst_add_a_mem_iy_im8, 19, 3),
        /* 87 */ inst!(inst_nop1, 4, 1),
        /* 88 */ inst!(inst_nop1, 4, 1),
        /* 89 */ inst!(inst_nop1, 4, 1),
        /* 8A */ inst!(inst_nop1, 4, 1),
        /* 8B */ inst!(inst_nop1, 4, 1),
        /* 8C */ inst!(inst_adc_a_iyh, 8, 2),
        /* 8D */ inst!(inst_adc_a_iyl, 8, 2),
        /* 8E */ inst!(inst_adc_a_mem_iy_im8, 19, 3),
        /* 8F */ inst!(inst_nop1, 4, 1),
        /* 90 */ inst!(inst_nop1, 4, 1),
        /* 91 */ inst!(inst_nop1, 4, 1),
        /* 92 */ inst!(inst_nop1, 4, 1),
        /* 93 */ inst!(inst_nop1, 4, 1),
        /* 94 */ inst!(inst_sub_a_iyh, 8, 2),
        /* 95 */ inst!(inst_sub_a_iyl, 8, 2),
        /* 96 */ inst!(inst_sub_a_mem_iy_im8, 19, 3),
        /* 97 */ inst!(inst_nop1, 4, 1),
        /* 98 */ inst!(inst_nop1, 4, 1),
        /* 99 */ inst!(inst_nop1, 4, 1),
        /* 9A */ inst!(inst_nop1, 4, 1),
        /* 9B */ inst!(inst_nop1, 4, 1),
        /* 9C */ inst!(inst_sbc_a_iyh, 8, 2),
        /* 9D */ inst!(inst_sbc_a_iyl, 8, 2),
        /* 9E */ inst!(inst_sbc_a_mem_iy_im8, 19, 3),
        /* 9F */ inst!(inst_nop1, 4, 1),
        /* A0 */ inst!(inst_nop1, 4, 1),
        /* A1 */ inst!(inst_nop1, 4, 1),
        /* A2 */ inst!(inst_nop1, 4, 1),
        /* A3 */ inst!(inst_nop1, 4, 1),
        /* A4 */ inst!(inst_and_a_iyh, 8, 2),
        /* A5 */ inst!(inst_and_a_iyl, 8, 2),
        /* A6 */ inst!(inst_and_a_mem_iy_im8, 19, 3),
        /* A7 */ inst!(inst_nop1, 4, 1),
        /* A8 */ inst!(inst_nop1, 4, 1),
        /* A9 */ inst!(inst_nop1, 4, 1),
        /* AA */ inst!(inst_nop1, 4, 1),
        /* AB */ inst!(inst_nop1, 4, 1),
        /* AC */ inst!(inst_xor_a_iyh, 8, 2),
        /* AD */ inst!(inst_xor_a_iyl, 8, 2),
        /* AE */ inst!(inst_xor_a_mem_iy_im8, 19, 3),
        /* AF */ inst!(inst_nop1, 4, 1),
        /* B0 */ inst!(inst_nop1, 4, 1),
        /* B1 */ inst!(inst_nop1, 4, 1),
        /* B2 */ inst!(inst_nop1, 4, 1),
        /* B3 */ inst!(inst_nop1, 4, 1),
        /* B4 */ inst!(inst_or_a_iyh, 8, 2),
        /* B5 */ inst!(inst_or_a_iyl, 8, 2),
        /* B6 */ inst!(inst_or_a_mem_iy_im8, 19, 3),
        /* B7 */ inst!(inst_nop1, 4, 1),
        /* B8 */ inst!(inst_nop1, 4, 1),
        /* B9 */ inst!(inst_nop1, 4, 1),
        /* BA */ inst!(inst_nop1, 4, 1),
        /* BB */ inst!(inst_nop1, 4, 1),
        /* BC */ inst!(inst_cp_a_iyh, 8, 2),
        /* BD */ inst!(inst_cp_a_iyl, 8, 2),
        /* BE */ inst!(inst_cp_a_mem_iy_im8, 19, 3),
        /* BF */ inst!(inst_nop1, 4, 1),
        /* C0 */ inst!(inst_nop1, 4, 1),
        /* C1 */ inst!(inst_nop1, 4, 1),
        /* C2 */ inst!(inst_nop1, 4, 1),
        /* C3 */ inst!(inst_nop1, 4, 1),
        /* C4 */ inst!(inst_nop1, 4, 1),
        /* C5 */ inst!(inst_nop1, 4, 1),
        /* C6 */ inst!(inst_nop1, 4, 1),
        /* C7 */ inst!(inst_nop1, 4, 1),
        /* C8 */ inst!(inst_nop1, 4, 1),
        /* C9 */ inst!(inst_nop1, 4, 1),
        /* CA */ inst!(inst_nop1, 4, 1),
        /* CB */ inst!(inst_nop1, 4, 1),
        /* CC */ inst!(inst_nop1, 4, 1),
        /* CD */ inst!(inst_nop1, 4, 1),
        /* CE */ inst!(inst_nop1, 4, 1),
        /* CF */ inst!(inst_nop1, 4, 1),
        /* D0 */ inst!(inst_nop1, 4, 1),
        /* D1 */ inst!(inst_nop1, 4, 1),
        /* D2 */ inst!(inst_nop1, 4, 1),
        /* D3 */ inst!(inst_nop1, 4, 1),
        /* D4 */ inst!(inst_nop1, 4, 1),
        /* D5 */ inst!(inst_nop1, 4, 1),
        /* D6 */ inst!(inst_nop1, 4, 1),
        /* D7 */ inst!(inst_nop1, 4, 1),
        /* D8 */ inst!(inst_nop1, 4, 1),
        /* D9 */ inst!(inst_nop1, 4, 1),
        /* DA */ inst!(inst_nop1, 4, 1),
        /* DB */ inst!(inst_nop1, 4, 1),
        /* DC */ inst!(inst_nop1, 4, 1),
        /* DD */ inst!(inst_nop1, 4, 1),
        /* DE */ inst!(inst_nop1, 4, 1),
        /* DF */ inst!(inst_nop1, 4, 1),
        /* E0 */ inst!(inst_nop1, 4, 1),
        /* E1 */ inst!(inst_pop_iy, 14, 2),
        /* E2 */ inst!(inst_nop1, 4, 1),
        /* E3 */ inst!(inst_ex_mem_sp_iy, 23, 2),
        /* E4 */ inst!(inst_nop1, 4, 1),
        /* E5 */ inst!(inst_push_iy, 15, 2),
        /* E6 */ inst!(inst_nop1, 4, 1),
        /* E7 */ inst!(inst_nop1, 4, 1),
        /* E8 */ inst!(inst_nop1, 4, 1),
        /* E9 */ inst!(inst_jp_iy, 8, 2),
        /* EA */ inst!(inst_nop1, 4, 1),
        /* EB */ inst!(inst_nop1, 4, 1),
        /* EC */ inst!(inst_nop1, 4, 1),
        /* ED */ inst!(inst_nop1, 4, 1),
        /* EE */ inst!(inst_nop1, 4, 1),
        /* EF */ inst!(inst_nop1, 4, 1),
        /* F0 */ inst!(inst_nop1, 4, 1),
        /* F1 */ inst!(inst_nop1, 4, 1),
        /* F2 */ inst!(inst_nop1, 4, 1),
        /* F3 */ inst!(inst_nop1, 4, 1),
        /* F4 */ inst!(inst_nop1, 4, 1),
        /* F5 */ inst!(inst_nop1, 4, 1),
        /* F6 */ inst!(inst_nop1, 4, 1),
        /* F7 */ inst!(inst_nop1, 4, 1),
        /* F8 */ inst!(inst_nop1, 4, 1),
        /* F9 */ inst!(inst_ld_sp_iy, 10, 2),
        /* FA */ inst!(inst_nop1, 4, 1),
        /* FB */ inst!(inst_nop1, 4, 1),
        /* FC */ inst!(inst_nop1, 4, 1),
        /* FD */ inst!(inst_nop1, 4, 1),
        /* FE */ inst!(inst_nop1, 4, 1),
        /* FF */ inst!(inst_nop1, 4, 1),
    ],
    iy_bit: [
        /* 00 */ inst!(inst_rlc_mem_iy_im8_b, 23, 4),
        /* 01 */ inst!(inst_rlc_mem_iy_im8_c, 23, 4),
        /* 02 */ inst!(inst_rlc_mem_iy_im8_d, 23, 4),
        /* 03 */ inst!(inst_rlc_mem_iy_im8_e, 23, 4),
        /* 04 */ inst!(inst_rlc_mem_iy_im8_h, 23, 4),
        /* 05 */ inst!(inst_rlc_mem_iy_im8_l, 23, 4),
        /* 06 */ inst!(inst_rlc_mem_iy_im8, 23, 4),
        /* 07 */ inst!(inst_rlc_mem_iy_im8_a, 23, 4),
        /* 08 */ inst!(inst_rrc_mem_iy_im8_b, 23, 4),
        /* 09 */ inst!(inst_rrc_mem_iy_im8_c, 23, 4),
        /* 0A */ inst!(inst_rrc_mem_iy_im8_d, 23, 4),
        /* 0B */ inst!(inst_rrc_mem_iy_im8_e, 23, 4),
        /* 0C */ inst!(inst_rrc_mem_iy_im8_h, 23, 4),
        /* 0D */ inst!(inst_rrc_mem_iy_im8_l, 23, 4),
        /* 0E */ inst!(inst_rrc_mem_iy_im8, 23, 4),
        /* 0F */ inst!(inst_rrc_mem_iy_im8_a, 23, 4),
        /* 10 */ inst!(inst_rl_mem_iy_im8_b, 23, 4),
        /* 11 */ inst!(inst_rl_mem_iy_im8_c, 23, 4),
        /* 12 */ inst!(inst_rl_mem_iy_im8_d, 23, 4),
        /* 13 */ inst!(inst_rl_mem_iy_im8_e, 23, 4),
        /* 14 */ inst!(inst_rl_mem_iy_im8_h, 23, 4),
        /* 15 */ inst!(inst_rl_mem_iy_im8_l, 23, 4),
        /* 16 */ inst!(inst_rl_mem_iy_im8, 23, 4),
        /* 17 */ inst!(inst_rl_mem_iy_im8_a, 23, 4),
        /* 18 */ inst!(inst_rr_mem_iy_im8_b, 23, 4),
        /* 19 */ inst!(inst_rr_mem_iy_im8_c, 23, 4),
        /* 1A */ inst!(inst_rr_mem_iy_im8_d, 23, 4),
        /* 1B */ inst!(inst_rr_mem_iy_im8_e, 23, 4),
        /* 1C */ inst!(inst_rr_mem_iy_im8_h, 23, 4),
        /* 1D */ inst!(inst_rr_mem_iy_im8_l, 23, 4),
        /* 1E */ inst!(inst_rr_mem_iy_im8, 23, 4),
        /* 1F */ inst!(inst_rr_mem_iy_im8_a, 23, 4),
        /* 20 */ inst!(inst_sla_mem_iy_im8_b, 23, 4),
        /* 21 */ inst!(inst_sla_mem_iy_im8_c, 23, 4),
        /* 22 */ inst!(inst_sla_mem_iy_im8_d, 23, 4),
        /* 23 */ inst!(inst_sla_mem_iy_im8_e, 23, 4),
        /* 24 */ inst!(inst_sla_mem_iy_im8_h, 23, 4),
        /* 25 */ inst!(inst_sla_mem_iy_im8_l, 23, 4),
        /* 26 */ inst!(inst_sla_mem_iy_im8, 23, 4),
        /* 27 */ inst!(inst_sla_mem_iy_im8_a, 23, 4),
        /* 28 */ inst!(inst_sra_mem_iy_im8_b, 23, 4),
        /* 29 */ inst!(inst_sra_mem_iy_im8_c, 23, 4),
        /* 2A */ inst!(inst_sra_mem_iy_im8_d, 23, 4),
        /* 2B */ inst!(inst_sra_mem_iy_im8_e, 23, 4),
        /* 2C */ inst!(inst_sra_mem_iy_im8_h, 23, 4),
        /* 2D */ inst!(inst_sra_mem_iy_im8_l, 23, 4),
        /* 2E */ inst!(inst_sra_mem_iy_im8, 23, 4),
        /* 2F */ inst!(inst_sra_mem_iy_im8_a, 23, 4),
        /* 30 */ inst!(inst_sll_mem_iy_im8_b, 23, 4),
        /* 31 */ inst!(inst_sll_mem_iy_im8_c, 23, 4),
        /* 32 */ inst!(inst_sll_mem_iy_im8_d, 23, 4),
        /* 33 */ inst!(inst_sll_mem_iy_im8_e, 23, 4),
        /* 34 */ inst!(inst_sll_mem_iy_im8_h, 23, 4),
        /* 35 */ inst!(inst_sll_mem_iy_im8_l, 23, 4),
        /* 36 */ inst!(inst_sll_mem_iy_im8, 23, 4),
        /* 37 */ inst!(inst_sll_mem_iy_im8_a, 23, 4),
        /* 38 */ inst!(inst_srl_mem_iy_im8_b, 23, 4),
        /* 39 */ inst!(inst_srl_mem_iy_im8_c, 23, 4),
        /* 3A */ inst!(inst_srl_mem_iy_im8_d, 23, 4),
        /* 3B */ inst!(inst_srl_mem_iy_im8_e, 23, 4),
        /* 3C */ inst!(inst_srl_mem_iy_im8_h, 23, 4),
        /* 3D */ inst!(inst_srl_mem_iy_im8_l, 23, 4),
        /* 3E */ inst!(inst_srl_mem_iy_im8, 23, 4),
        /* 3F */ inst!(inst_srl_mem_iy_im8_a, 23, 4),
        /* 40 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 41 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 42 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 43 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 44 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 45 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 46 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 47 */ inst!(inst_bit_0_mem_iy_im8, 20, 4),
        /* 48 */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 49 */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4A */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4B */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4C */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4D */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4E */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 4F */ inst!(inst_bit_1_mem_iy_im8, 20, 4),
        /* 50 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 51 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 52 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 53 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 54 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 55 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 56 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 57 */ inst!(inst_bit_2_mem_iy_im8, 20, 4),
        /* 58 */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 59 */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5A */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5B */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5C */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5D */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5E */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 5F */ inst!(inst_bit_3_mem_iy_im8, 20, 4),
        /* 60 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 61 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 62 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 63 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 64 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 65 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 66 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 67 */ inst!(inst_bit_4_mem_iy_im8, 20, 4),
        /* 68 */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 69 */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6A */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6B */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6C */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6D */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6E */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 6F */ inst!(inst_bit_5_mem_iy_im8, 20, 4),
        /* 70 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 71 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 72 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 73 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 74 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 75 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 76 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 77 */ inst!(inst_bit_6_mem_iy_im8, 20, 4),
        /* 78 */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 79 */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7A */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7B */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7C */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7D */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7E */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 7F */ inst!(inst_bit_7_mem_iy_im8, 20, 4),
        /* 80 */ inst!(inst_res_0_mem_iy_im8_b, 23, 4),
        /* 81 */ inst!(inst_res_0_mem_iy_im8_c, 23, 4),
        /* 82 */ inst!(inst_res_0_mem_iy_im8_d, 23, 4),
        /* 83 */ inst!(inst_res_0_mem_iy_im8_e, 23, 4),
        /* 84 */ inst!(inst_res_0_mem_iy_im8_h, 23, 4),
        /* 85 */ inst!(inst_res_0_mem_iy_im8_l, 23, 4),
        /* 86 */ inst!(inst_res_0_mem_iy_im8, 23, 4),
        /* 87 */ inst!(inst_res_0_mem_iy_im8_a, 23, 4),
        /* 88 */ inst!(inst_res_1_mem_iy_im8_b, 23, 4),
        /* 89 */ inst!(inst_res_1_mem_iy_im8_c, 23, 4),
        /* 8A */ inst!(inst_res_1_mem_iy_im8_d, 23, 4),
        /* 8B */ inst!(inst_res_1_mem_iy_im8_e, 23, 4),
        /* 8C */ inst!(inst_res_1_mem_iy_im8_h, 23, 4),
        /* 8D */ inst!(inst_res_1_mem_iy_im8_l, 23, 4),
        /* 8E */ inst!(inst_res_1_mem_iy_im8, 23, 4),
        /* 8F */ inst!(inst_res_1_mem_iy_im8_a, 23, 4),
        /* 90 */ inst!(inst_res_2_mem_iy_im8_b, 23, 4),
        /* 91 */ inst!(inst_res_2_mem_iy_im8_c, 23, 4),
        /* 92 */ inst!(inst_res_2_mem_iy_im8_d, 23, 4),
        /* 93 */ inst!(inst_res_2_mem_iy_im8_e, 23, 4),
        /* 94 */ inst!(inst_res_2_mem_iy_im8_h, 23, 4),
        /* 95 */ inst!(inst_res_2_mem_iy_im8_l, 23, 4),
        /* 96 */ inst!(inst_res_2_mem_iy_im8, 23, 4),
        /* 97 */ inst!(inst_res_2_mem_iy_im8_a, 23, 4),
        /* 98 */ inst!(inst_res_3_mem_iy_im8_b, 23, 4),
        /* 99 */ inst!(inst_res_3_mem_iy_im8_c, 23, 4),
        /* 9A */ inst!(inst_res_3_mem_iy_im8_d, 23, 4),
        /* 9B */ inst!(inst_res_3_mem_iy_im8_e, 23, 4),
        /* 9C */ inst!(inst_res_3_mem_iy_im8_h, 23, 4),
        /* 9D */ inst!(inst_res_3_mem_iy_im8_l, 23, 4),
        /* 9E */ inst!(inst_res_3_mem_iy_im8, 23, 4),
        /* 9F */ inst!(inst_res_3_mem_iy_im8_a, 23, 4),
        /* A0 */ inst!(inst_res_4_mem_iy_im8_b, 23, 4),
        /* A1 */ inst!(inst_res_4_mem_iy_im8_c, 23, 4),
        /* A2 */ inst!(inst_res_4_mem_iy_im8_d, 23, 4),
        /* A3 */ inst!(inst_res_4_mem_iy_im8_e, 23, 4),
        /* A4 */ inst!(inst_res_4_mem_iy_im8_h, 23, 4),
        /* A5 */ inst!(inst_res_4_mem_iy_im8_l, 23, 4),
        /* A6 */ inst!(inst_res_4_mem_iy_im8, 23, 4),
        /* A7 */ inst!(inst_res_4_mem_iy_im8_a, 23, 4),
        /* A8 */ inst!(inst_res_5_mem_iy_im8_b, 23, 4),
        /* A9 */ inst!(inst_res_5_mem_iy_im8_c, 23, 4),
        /* AA */ inst!(inst_res_5_mem_iy_im8_d, 23, 4),
        /* AB */ inst!(inst_res_5_mem_iy_im8_e, 23, 4),
        /* AC */ inst!(inst_res_5_mem_iy_im8_h, 23, 4),
        /* AD */ inst!(inst_res_5_mem_iy_im8_l, 23, 4),
        /* AE */ inst!(inst_res_5_mem_iy_im8, 23, 4),
        /* AF */ inst!(inst_res_5_mem_iy_im8_a, 23, 4),
        /* B0 */ inst!(inst_res_6_mem_iy_im8_b, 23, 4),
        /* B1 */ inst!(inst_res_6_mem_iy_im8_c, 23, 4),
        /* B2 */ inst!(inst_res_6_mem_iy_im8_d, 23, 4),
        /* B3 */ inst!(inst_res_6_mem_iy_im8_e, 23, 4),
        /* B4 */ inst!(inst_res_6_mem_iy_im8_h, 23, 4),
        /* B5 */ inst!(inst_res_6_mem_iy_im8_l, 23, 4),
        /* B6 */ inst!(inst_res_6_mem_iy_im8, 23, 4),
        /* B7 */ inst!(inst_res_6_mem_iy_im8_a, 23, 4),
        /* B8 */ inst!(inst_res_7_mem_iy_im8_b, 23, 4),
        /* B9 */ inst!(inst_res_7_mem_iy_im8_c, 23, 4),
        /* BA */ inst!(inst_res_7_mem_iy_im8_d, 23, 4),
        /* BB */ inst!(inst_res_7_mem_iy_im8_e, 23, 4),
        /* BC */ inst!(inst_res_7_mem_iy_im8_h, 23, 4),
        /* BD */ inst!(inst_res_7_mem_iy_im8_l, 23, 4),
        /* BE */ inst!(inst_res_7_mem_iy_im8, 23, 4),
        /* BF */ inst!(inst_res_7_mem_iy_im8_a, 23, 4),
        /* C0 */ inst!(inst_set_0_mem_iy_im8_b, 23, 4),
        /* C1 */ inst!(inst_set_0_mem_iy_im8_c, 23, 4),
        /* C2 */ inst!(inst_set_0_mem_iy_im8_d, 23, 4),
        /* C3 */ inst!(inst_set_0_mem_iy_im8_e, 23, 4),
        /* C4 */ inst!(inst_set_0_mem_iy_im8_h, 23, 4),
        /* C5 */ inst!(inst_set_0_mem_iy_im8_l, 23, 4),
        /* C6 */ inst!(inst_set_0_mem_iy_im8, 23, 4),
        /* C7 */ inst!(inst_set_0_mem_iy_im8_a, 23, 4),
        /* C8 */ inst!(inst_set_1_mem_iy_im8_b, 23, 4),
        /* C9 */ inst!(inst_set_1_mem_iy_im8_c, 23, 4),
        /* CA */ inst!(inst_set_1_mem_iy_im8_d, 23, 4),
        /* CB */ inst!(inst_set_1_mem_iy_im8_e, 23, 4),
        /* CC */ inst!(inst_set_1_mem_iy_im8_h, 23, 4),
        /* CD */ inst!(inst_set_1_mem_iy_im8_l, 23, 4),
        /* CE */ inst!(inst_set_1_mem_iy_im8, 23, 4),
        /* CF */ inst!(inst_set_1_mem_iy_im8_a, 23, 4),
        /* D0 */ inst!(inst_set_2_mem_iy_im8_b, 23, 4),
        /* D1 */ inst!(inst_set_2_mem_iy_im8_c, 23, 4),
        /* D2 */ inst!(inst_set_2_mem_iy_im8_d, 23, 4),
        /* D3 */ inst!(inst_set_2_mem_iy_im8_e, 23, 4),
        /* D4 */ inst!(inst_set_2_mem_iy_im8_h, 23, 4),
        /* D5 */ inst!(inst_set_2_mem_iy_im8_l, 23, 4),
        /* D6 */ inst!(inst_set_2_mem_iy_im8, 23, 4),
        /* D7 */ inst!(inst_set_2_mem_iy_im8_a, 23, 4),
        /* D8 */ inst!(inst_set_3_mem_iy_im8_b, 23, 4),
        /* D9 */ inst!(inst_set_3_mem_iy_im8_c, 23, 4),
        /* DA */ inst!(inst_set_3_mem_iy_im8_d, 23, 4),
        /* DB */ inst!(inst_set_3_mem_iy_im8_e, 23, 4),
        /* DC */ inst!(inst_set_3_mem_iy_im8_h, 23, 4),
        /* DD */ inst!(inst_set_3_mem_iy_im8_l, 23, 4),
        /* DE */ inst!(inst_set_3_mem_iy_im8, 23, 4),
        /* DF */ inst!(inst_set_3_mem_iy_im8_a, 23, 4),
        /* E0 */ inst!(inst_set_4_mem_iy_im8_b, 23, 4),
        /* E1 */ inst!(inst_set_4_mem_iy_im8_c, 23, 4),
        /* E2 */ inst!(inst_set_4_mem_iy_im8_d, 23, 4),
        /* E3 */ inst!(inst_set_4_mem_iy_im8_e, 23, 4),
        /* E4 */ inst!(inst_set_4_mem_iy_im8_h, 23, 4),
        /* E5 */ inst!(inst_set_4_mem_iy_im8_l, 23, 4),
        /* E6 */ inst!(inst_set_4_mem_iy_im8, 23, 4),
        /* E7 */ inst!(inst_set_4_mem_iy_im8_a, 23, 4),
        /* E8 */ inst!(inst_set_5_mem_iy_im8_b, 23, 4),
        /* E9 */ inst!(inst_set_5_mem_iy_im8_c, 23, 4),
        /* EA */ inst!(inst_set_5_mem_iy_im8_d, 23, 4),
        /* EB */ inst!(inst_set_5_mem_iy_im8_e, 23, 4),
        /* EC */ inst!(inst_set_5_mem_iy_im8_h, 23, 4),
        /* ED */ inst!(inst_set_5_mem_iy_im8_l, 23, 4),
        /* EE */ inst!(inst_set_5_mem_iy_im8, 23, 4),
        /* EF */ inst!(inst_set_5_mem_iy_im8_a, 23, 4),
        /* F0 */ inst!(inst_set_6_mem_iy_im8_b, 23, 4),
        /* F1 */ inst!(inst_set_6_mem_iy_im8_c, 23, 4),
        /* F2 */ inst!(inst_set_6_mem_iy_im8_d, 23, 4),
        /* F3 */ inst!(inst_set_6_mem_iy_im8_e, 23, 4),
        /* F4 */ inst!(inst_set_6_mem_iy_im8_h, 23, 4),
        /* F5 */ inst!(inst_set_6_mem_iy_im8_l, 23, 4),
        /* F6 */ inst!(inst_set_6_mem_iy_im8, 23, 4),
        /* F7 */ inst!(inst_set_6_mem_iy_im8_a, 23, 4),
        /* F8 */ inst!(inst_set_7_mem_iy_im8_b, 23, 4),
        /* F9 */ inst!(inst_set_7_mem_iy_im8_c, 23, 4),
        /* FA */ inst!(inst_set_7_mem_iy_im8_d, 23, 4),
        /* FB */ inst!(inst_set_7_mem_iy_im8_e, 23, 4),
        /* FC */ inst!(inst_set_7_mem_iy_im8_h, 23, 4),
        /* FD */ inst!(inst_set_7_mem_iy_im8_l, 23, 4),
        /* FE */ inst!(inst_set_7_mem_iy_im8, 23, 4),
        /* FF */ inst!(inst_set_7_mem_iy_im8_a, 23, 4),
    ],
};

// A function to decode the instruction in the given prefetch bytes.
//
// The buffer always holds four bytes; when the prefetch was cut short by
// the top of the address space the caller compares the decoded size
// against what it actually had.
pub fn decode(bytes: [u8; 4]) -> Decoded {
    match bytes[0] {
        0xCB => {
            let opcode = bytes[1];

            Decoded {
                inst: &INSTRUCTION_SET.bit[opcode as usize],
                prefix: Prefix::Cb,
                args: Args::none(),
            }
        },
        0xED => {
            let opcode = bytes[1];

            let inst = if (opcode >= 0x40) && (opcode <= 0x7F) {
                &INSTRUCTION_SET.extended[(opcode - 0x40) as usize]
            } else if (opcode >= 0xA0) && (opcode <= 0xBF) {
                &INSTRUCTION_SET.extended[(opcode - 0xA0 + 0x40) as usize]
            } else {
                // Undefined ed encodings are the two-byte NOP.
                &INSTRUCTION_SET.nop_2
            };
            Decoded {
                inst,
                prefix: Prefix::Ed,
                args: Args::new(bytes[2], bytes[3]),
            }
        },
        0xDD => {
            if bytes[1] == 0xCB {
                let opcode = bytes[3];

                Decoded {
                    inst: &INSTRUCTION_SET.ix_bit[opcode as usize],
                    prefix: Prefix::DdCb,
                    args: Args::new(bytes[2], bytes[3]),
                }
            } else {
                let inst = &INSTRUCTION_SET.ix[bytes[1] as usize];
                if inst.size == 1 {
                    // The prefix doesn't index this opcode (every real dd
                    // form is at least two bytes): it acts as a NOP and
                    // the next byte decodes fresh.  dd/fd chains collapse
                    // through the same path.
                    Decoded {
                        inst: &INSTRUCTION_SET.prefix_nop,
                        prefix: Prefix::None,
                        args: Args::none(),
                    }
                } else {
                    Decoded {
                        inst,
                        prefix: Prefix::Dd,
                        args: Args::new(bytes[2], bytes[3]),
                    }
                }
            }
        },
        0xFD => {
            if bytes[1] == 0xCB {
                let opcode = bytes[3];

                Decoded {
                    inst: &INSTRUCTION_SET.iy_bit[opcode as usize],
                    prefix: Prefix::FdCb,
                    args: Args::new(bytes[2], bytes[3]),
                }
            } else {
                let inst = &INSTRUCTION_SET.iy[bytes[1] as usize];
                if inst.size == 1 {
                    Decoded {
                        inst: &INSTRUCTION_SET.prefix_nop,
                        prefix: Prefix::None,
                        args: Args::none(),
                    }
                } else {
                    Decoded {
                        inst,
                        prefix: Prefix::Fd,
                        args: Args::new(bytes[2], bytes[3]),
                    }
                }
            }
        },
        _ => {
            Decoded {
                inst: &INSTRUCTION_SET.main[bytes[0] as usize],
                prefix: Prefix::None,
                args: Args::new(bytes[1], bytes[2]),
            }
        },
    }
}

// The flag conditions of the conditional jumps, calls and returns.

fn cond_nz(flags: &flags::Flags) -> bool { !flags.zero }
fn cond_z(flags: &flags::Flags)  -> bool { flags.zero }
fn cond_nc(flags: &flags::Flags) -> bool { !flags.carry }
fn cond_c(flags: &flags::Flags)  -> bool { flags.carry }
fn cond_po(flags: &flags::Flags) -> bool { !flags.parity_overflow }
fn cond_pe(flags: &flags::Flags) -> bool { flags.parity_overflow }
fn cond_p(flags: &flags::Flags)  -> bool { !flags.sign }
fn cond_m(flags: &flags::Flags)  -> bool { flags.sign }

// Macros stamping out the register-operand instruction families.  Each
// generates one routine of the same shape the handwritten ones have; the
// lookup tables point straight at the generated names.

// 8-bit register-to-register loads, including the ixh/ixl/iyh/iyl forms.
macro_rules! ld_reg_reg {
    ($name:ident, $set:ident, $get:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = cpu.regs.$get();
            cpu.regs.$set(val);
        }
    };
}

macro_rules! ld_reg_im8 {
    ($name:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = cpu.args.imm8();
            cpu.regs.$set(val);
        }
    };
}

macro_rules! ld_reg_mem_hl {
    ($name:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.hl;
            let val = cpu.timed_read_byte(bus, addr);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! ld_mem_hl_reg {
    ($name:ident, $get:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.hl;
            let val = cpu.regs.$get();
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

// The (ix+d)/(iy+d) loads.  Every indexed form latches the effective
// address into WZ.
macro_rules! ld_reg_mem_idx {
    ($name:ident, $set:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let val = cpu.timed_read_byte(bus, addr);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! ld_mem_idx_reg {
    ($name:ident, $get:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let val = cpu.regs.$get();
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

macro_rules! inc_reg {
    ($name:ident, $get:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = flags::inc_byte(cpu.regs.$get(), &mut cpu.regs.flags);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! dec_reg {
    ($name:ident, $get:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = flags::dec_byte(cpu.regs.$get(), &mut cpu.regs.flags);
            cpu.regs.$set(val);
        }
    };
}

// 16-bit inc/dec never touch the flags.
macro_rules! inc_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            cpu.regs.$field = cpu.regs.$field.wrapping_add(1);
        }
    };
}

macro_rules! dec_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            cpu.regs.$field = cpu.regs.$field.wrapping_sub(1);
        }
    };
}

macro_rules! ld_rr_im16 {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            cpu.regs.$field = cpu.args.imm16();
        }
    };
}

macro_rules! ld_mem_im16_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.args.imm16();
            let val = cpu.regs.$field;
            cpu.timed_write_word(bus, addr, val);
            cpu.regs.wz = addr.wrapping_add(1);
        }
    };
}

macro_rules! ld_rr_mem_im16 {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.args.imm16();
            let val = cpu.timed_read_word(bus, addr);
            cpu.regs.$field = val;
            cpu.regs.wz = addr.wrapping_add(1);
        }
    };
}

macro_rules! ld_sp_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            cpu.regs.sp = cpu.regs.$field;
        }
    };
}

// The 8080-style 16-bit add; WZ picks up the old destination plus one.
macro_rules! add_word {
    ($name:ident, $dst:ident, $src:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let old_val = cpu.regs.$dst;
            let to_add = cpu.regs.$src;

            cpu.regs.wz = old_val.wrapping_add(1);
            cpu.regs.$dst = flags::word_add(old_val, to_add, &mut cpu.regs.flags);
        }
    };
}

macro_rules! adc_word {
    ($name:ident, $src:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let old_val = cpu.regs.hl;
            let to_add = cpu.regs.$src;
            let carry_in = cpu.regs.flags.carry;

            cpu.regs.wz = old_val.wrapping_add(1);
            cpu.regs.hl = flags::word_adc(old_val, to_add, carry_in, &mut cpu.regs.flags);
        }
    };
}

macro_rules! sbc_word {
    ($name:ident, $src:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let old_val = cpu.regs.hl;
            let to_sub = cpu.regs.$src;
            let borrow_in = cpu.regs.flags.carry;

            cpu.regs.wz = old_val.wrapping_add(1);
            cpu.regs.hl = flags::word_sbc(old_val, to_sub, borrow_in, &mut cpu.regs.flags);
        }
    };
}

// The 8-bit accumulator arithmetic.  `true` in the carry slot makes the
// adc/sbc variant, `false` the plain one.
macro_rules! arith_a_reg {
    ($name:ident, $get:ident, $op:ident, $use_carry:literal) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let operand = cpu.regs.$get();
            let carry_in = $use_carry && cpu.regs.flags.carry;
            cpu.regs.a = flags::$op(cpu.regs.a, operand, carry_in, &mut cpu.regs.flags);
        }
    };
}

macro_rules! arith_a_im8 {
    ($name:ident, $op:ident, $use_carry:literal) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let operand = cpu.args.imm8();
            let carry_in = $use_carry && cpu.regs.flags.carry;
            cpu.regs.a = flags::$op(cpu.regs.a, operand, carry_in, &mut cpu.regs.flags);
        }
    };
}

macro_rules! arith_a_mem_hl {
    ($name:ident, $op:ident, $use_carry:literal) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let operand = cpu.timed_read_byte(bus, cpu.regs.hl);
            let carry_in = $use_carry && cpu.regs.flags.carry;
            cpu.regs.a = flags::$op(cpu.regs.a, operand, carry_in, &mut cpu.regs.flags);
        }
    };
}

macro_rules! arith_a_mem_idx {
    ($name:ident, $op:ident, $use_carry:literal, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let operand = cpu.timed_read_byte(bus, addr);
            let carry_in = $use_carry && cpu.regs.flags.carry;
            cpu.regs.a = flags::$op(cpu.regs.a, operand, carry_in, &mut cpu.regs.flags);
        }
    };
}

macro_rules! logic_a_reg {
    ($name:ident, $get:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let operand = cpu.regs.$get();
            cpu.regs.a = flags::$op(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}

macro_rules! logic_a_im8 {
    ($name:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let operand = cpu.args.imm8();
            cpu.regs.a = flags::$op(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}

macro_rules! logic_a_mem_hl {
    ($name:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let operand = cpu.timed_read_byte(bus, cpu.regs.hl);
            cpu.regs.a = flags::$op(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}

macro_rules! logic_a_mem_idx {
    ($name:ident, $op:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let operand = cpu.timed_read_byte(bus, addr);
            cpu.regs.a = flags::$op(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}

// cp leaves the accumulator alone; its X/Y sourcing from the operand is
// the flag engine's business.
macro_rules! cp_a_reg {
    ($name:ident, $get:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let operand = cpu.regs.$get();
            flags::byte_cp(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}

// The cb-prefixed rotate/shift family.
macro_rules! cb_rot_reg {
    ($name:ident, $get:ident, $set:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = flags::$op(cpu.regs.$get(), &mut cpu.regs.flags);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! cb_rot_mem_hl {
    ($name:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.hl;
            let old_val = cpu.timed_read_byte(bus, addr);
            let new_val = flags::$op(old_val, &mut cpu.regs.flags);
            cpu.timed_write_byte(bus, addr, new_val);
        }
    };
}

// bit n,r sources X/Y from the tested register itself.
macro_rules! cb_bit_reg {
    ($name:ident, $bit:expr, $get:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = cpu.regs.$get();
            flags::bit_test(val, $bit, val, &mut cpu.regs.flags);
        }
    };
}

// bit n,(hl) sources X/Y from the high byte of WZ - the only place the
// internal latch ever becomes visible.
macro_rules! cb_bit_mem_hl {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let val = cpu.timed_read_byte(bus, cpu.regs.hl);
            let xy_source = bits::high_byte(cpu.regs.wz);
            flags::bit_test(val, $bit, xy_source, &mut cpu.regs.flags);
        }
    };
}

macro_rules! cb_res_reg {
    ($name:ident, $bit:expr, $get:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = cpu.regs.$get() & !(1 << $bit);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! cb_set_reg {
    ($name:ident, $bit:expr, $get:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let val = cpu.regs.$get() | (1 << $bit);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! cb_res_mem_hl {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.hl;
            let val = cpu.timed_read_byte(bus, addr) & !(1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

macro_rules! cb_set_mem_hl {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.hl;
            let val = cpu.timed_read_byte(bus, addr) | (1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

// The ddcb/fdcb forms work on the effective address the engine latched
// into WZ before running the microcode.
macro_rules! idx_rot_mem {
    ($name:ident, $op:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let old_val = cpu.timed_read_byte(bus, addr);
            let new_val = flags::$op(old_val, &mut cpu.regs.flags);
            cpu.timed_write_byte(bus, addr, new_val);
        }
    };
}

// The undocumented column variants also copy the written value into a
// register.
macro_rules! idx_rot_mem_copy {
    ($name:ident, $op:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let old_val = cpu.timed_read_byte(bus, addr);
            let new_val = flags::$op(old_val, &mut cpu.regs.flags);
            cpu.timed_write_byte(bus, addr, new_val);
            cpu.regs.$set(new_val);
        }
    };
}

macro_rules! idx_bit_mem {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let val = cpu.timed_read_byte(bus, addr);
            let xy_source = bits::high_byte(cpu.regs.wz);
            flags::bit_test(val, $bit, xy_source, &mut cpu.regs.flags);
        }
    };
}

macro_rules! idx_res_mem {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let val = cpu.timed_read_byte(bus, addr) & !(1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

macro_rules! idx_res_mem_copy {
    ($name:ident, $bit:expr, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let val = cpu.timed_read_byte(bus, addr) & !(1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
            cpu.regs.$set(val);
        }
    };
}

macro_rules! idx_set_mem {
    ($name:ident, $bit:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let val = cpu.timed_read_byte(bus, addr) | (1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

macro_rules! idx_set_mem_copy {
    ($name:ident, $bit:expr, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.wz;
            let val = cpu.timed_read_byte(bus, addr) | (1 << $bit);
            cpu.timed_write_byte(bus, addr, val);
            cpu.regs.$set(val);
        }
    };
}

// Conditional control flow.  jp and call latch the target into WZ whether
// or not the branch is taken; jr only on a taken branch.
macro_rules! jr_cc {
    ($name:ident, $cond:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            if $cond(&cpu.regs.flags) {
                let target = bits::displace(cpu.regs.pc, cpu.args.displacement());
                cpu.regs.pc = target;
                cpu.regs.wz = target;
                cpu.extra_t = 5;
            }
        }
    };
}

macro_rules! jp_cc {
    ($name:ident, $cond:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            let target = cpu.args.imm16();
            cpu.regs.wz = target;
            if $cond(&cpu.regs.flags) {
                cpu.regs.pc = target;
            }
        }
    };
}

macro_rules! call_cc {
    ($name:ident, $cond:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let target = cpu.args.imm16();
            cpu.regs.wz = target;
            if $cond(&cpu.regs.flags) {
                let return_addr = cpu.regs.pc;
                cpu.push_word(bus, return_addr);
                cpu.regs.pc = target;
                cpu.extra_t = 7;
            }
        }
    };
}

macro_rules! ret_cc {
    ($name:ident, $cond:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            if $cond(&cpu.regs.flags) {
                let addr = cpu.pop_word(bus);
                cpu.regs.pc = addr;
                cpu.regs.wz = addr;
                cpu.extra_t = 6;
            }
        }
    };
}

macro_rules! rst {
    ($name:ident, $target:expr) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let return_addr = cpu.regs.pc;
            cpu.push_word(bus, return_addr);
            cpu.regs.pc = $target;
            cpu.regs.wz = $target;
        }
    };
}

macro_rules! push_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let val = cpu.regs.$field;
            cpu.push_word(bus, val);
        }
    };
}

macro_rules! pop_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let val = cpu.pop_word(bus);
            cpu.regs.$field = val;
        }
    };
}

// in r,(c) and out (c),r; both leave BC+1 in WZ.
macro_rules! in_reg_mem_bc {
    ($name:ident, $set:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.bc;
            let val = cpu.timed_port_read(bus, addr);
            flags::in_byte_flags(val, &mut cpu.regs.flags);
            cpu.regs.$set(val);
            cpu.regs.wz = addr.wrapping_add(1);
        }
    };
}

macro_rules! out_mem_bc_reg {
    ($name:ident, $get:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = cpu.regs.bc;
            let val = cpu.regs.$get();
            cpu.timed_port_write(bus, addr, val);
            cpu.regs.wz = addr.wrapping_add(1);
        }
    };
}

// ex (sp),rr swaps the word on the stack with the register; WZ takes the
// incoming value.
macro_rules! ex_mem_sp_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let old_val = cpu.regs.$field;
            let sp = cpu.regs.sp;
            let from_stack = cpu.timed_read_word(bus, sp);
            cpu.timed_write_word(bus, sp, old_val);
            cpu.regs.$field = from_stack;
            cpu.regs.wz = from_stack;
        }
    };
}

// jp (hl)/(ix)/(iy) - despite the mnemonic, no memory access and no WZ
// update.
macro_rules! jp_rr {
    ($name:ident, $field:ident) => {
        fn $name(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
            cpu.regs.pc = cpu.regs.$field;
        }
    };
}

macro_rules! inc_mem_idx {
    ($name:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let old_val = cpu.timed_read_byte(bus, addr);
            let new_val = flags::inc_byte(old_val, &mut cpu.regs.flags);
            cpu.timed_write_byte(bus, addr, new_val);
        }
    };
}

macro_rules! dec_mem_idx {
    ($name:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let old_val = cpu.timed_read_byte(bus, addr);
            let new_val = flags::dec_byte(old_val, &mut cpu.regs.flags);
            cpu.timed_write_byte(bus, addr, new_val);
        }
    };
}

macro_rules! ld_mem_idx_im8 {
    ($name:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let val = cpu.args.trailing_imm8();
            cpu.timed_write_byte(bus, addr, val);
        }
    };
}

macro_rules! cp_a_mem_idx {
    ($name:ident, $idx:ident) => {
        fn $name(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
            let addr = bits::displace(cpu.regs.$idx, cpu.args.displacement());
            cpu.regs.wz = addr;
            let operand = cpu.timed_read_byte(bus, addr);
            flags::byte_cp(cpu.regs.a, operand, &mut cpu.regs.flags);
        }
    };
}
// No-ops.  PC has already been moved past the instruction by the engine,
// so there is nothing left to do; the one-byte form doubles as the
// ineffective-prefix NOP.
fn inst_nop1(_cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
}

fn inst_nop2(_cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
}

// Main instructions.

// The accumulator loads through BC/DE and an immediate address.  The
// stores leak the accumulator into the high byte of WZ.
fn inst_ld_mem_bc_a(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;
    let val = cpu.regs.a;

    cpu.timed_write_byte(bus, addr, val);
    cpu.regs.wz = bits::compose_word(val, bits::low_byte(addr.wrapping_add(1)));
}

fn inst_ld_mem_de_a(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.de;
    let val = cpu.regs.a;

    cpu.timed_write_byte(bus, addr, val);
    cpu.regs.wz = bits::compose_word(val, bits::low_byte(addr.wrapping_add(1)));
}

fn inst_ld_a_mem_bc(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;

    cpu.regs.a = cpu.timed_read_byte(bus, addr);
    cpu.regs.wz = addr.wrapping_add(1);
}

fn inst_ld_a_mem_de(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.de;

    cpu.regs.a = cpu.timed_read_byte(bus, addr);
    cpu.regs.wz = addr.wrapping_add(1);
}

fn inst_ld_mem_im16_a(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.args.imm16();
    let val = cpu.regs.a;

    cpu.timed_write_byte(bus, addr, val);
    cpu.regs.wz = bits::compose_word(val, bits::low_byte(addr.wrapping_add(1)));
}

fn inst_ld_a_mem_im16(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.args.imm16();

    cpu.regs.a = cpu.timed_read_byte(bus, addr);
    cpu.regs.wz = addr.wrapping_add(1);
}

fn inst_ld_mem_hl_im8(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.hl;
    let val = cpu.args.imm8();

    cpu.timed_write_byte(bus, addr, val);
}

fn inst_inc_mem_hl(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.hl;
    let old_val = cpu.timed_read_byte(bus, addr);
    let new_val = flags::inc_byte(old_val, &mut cpu.regs.flags);

    cpu.timed_write_byte(bus, addr, new_val);
}

fn inst_dec_mem_hl(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.hl;
    let old_val = cpu.timed_read_byte(bus, addr);
    let new_val = flags::dec_byte(old_val, &mut cpu.regs.flags);

    cpu.timed_write_byte(bus, addr, new_val);
}

// The accumulator-only rotates preserve S, Z and P/V; X and Y still track
// the result.
fn inst_rlca(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;
    let new_val = old_val.rotate_left(1);

    cpu.regs.flags.carry = (old_val & 0x80) != 0;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_rrca(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;
    let new_val = old_val.rotate_right(1);

    cpu.regs.flags.carry = (old_val & 0x01) != 0;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_rla(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;
    let new_val = (old_val << 1) | (if cpu.regs.flags.carry { 0x01 } else { 0 });

    cpu.regs.flags.carry = (old_val & 0x80) != 0;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_rra(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;
    let new_val = (old_val >> 1) | (if cpu.regs.flags.carry { 0x80 } else { 0 });

    cpu.regs.flags.carry = (old_val & 0x01) != 0;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

// Decimal adjust.  The correction depends on N, H, C and both nybbles of
// the accumulator; the canonical table collapses to two conditional
// correction terms.
fn inst_daa(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;
    let mut correction: u8 = 0;
    let mut carry_out = cpu.regs.flags.carry;

    if cpu.regs.flags.half_carry || ((old_val & 0x0F) > 0x09) {
        correction |= 0x06;
    }
    if cpu.regs.flags.carry || (old_val > 0x99) {
        correction |= 0x60;
        carry_out = true;
    }

    let new_val = if cpu.regs.flags.add_sub {
        old_val.wrapping_sub(correction)
    } else {
        old_val.wrapping_add(correction)
    };

    cpu.regs.flags.carry = carry_out;
    cpu.regs.flags.half_carry = if cpu.regs.flags.add_sub {
        cpu.regs.flags.half_carry && ((old_val & 0x0F) < 0x06)
    } else {
        (old_val & 0x0F) > 0x09
    };
    cpu.regs.flags.zero = (new_val == 0);
    cpu.regs.flags.sign = bits::is_byte_negative(new_val);
    cpu.regs.flags.parity_overflow = bits::even_parity(new_val);
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_cpl(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let new_val = !cpu.regs.a;

    cpu.regs.flags.half_carry = true;
    cpu.regs.flags.add_sub = true;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_scf(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.regs.flags.carry = true;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(cpu.regs.a);
}

// ccf moves the old carry into half-carry before inverting it.
fn inst_ccf(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_carry = cpu.regs.flags.carry;

    cpu.regs.flags.half_carry = old_carry;
    cpu.regs.flags.carry = !old_carry;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.set_undoc_xy(cpu.regs.a);
}

fn inst_ex_af_af_prime(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.regs.exchange_af();
}

fn inst_exx(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.regs.exchange_main_set();
}

fn inst_ex_de_hl(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    std::mem::swap(&mut cpu.regs.de, &mut cpu.regs.hl);
}

fn inst_djnz_im8(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let new_b = cpu.regs.b().wrapping_sub(1);
    cpu.regs.set_b(new_b);

    if new_b != 0 {
        let target = bits::displace(cpu.regs.pc, cpu.args.displacement());
        cpu.regs.pc = target;
        cpu.regs.wz = target;
        cpu.extra_t = 5;
    }
}

fn inst_jr_im8(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let target = bits::displace(cpu.regs.pc, cpu.args.displacement());

    cpu.regs.pc = target;
    cpu.regs.wz = target;
}

fn inst_jp_im16(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let target = cpu.args.imm16();

    cpu.regs.pc = target;
    cpu.regs.wz = target;
}

fn inst_call_im16(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let target = cpu.args.imm16();
    let return_addr = cpu.regs.pc;

    cpu.push_word(bus, return_addr);
    cpu.regs.pc = target;
    cpu.regs.wz = target;
}

fn inst_ret(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.pop_word(bus);

    cpu.regs.pc = addr;
    cpu.regs.wz = addr;
}

fn inst_push_af(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.regs.af();
    cpu.push_word(bus, val);
}

fn inst_pop_af(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.pop_word(bus);
    cpu.regs.set_af(val);
}

fn inst_halt(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.enter_halt();
}

// in a,(n) and out (n),a put the accumulator on the high half of the
// address bus.  Neither touches the flags.
fn inst_in_a_im8(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = bits::compose_word(cpu.regs.a, cpu.args.imm8());
    let val = cpu.timed_port_read(bus, addr);

    cpu.regs.wz = addr.wrapping_add(1);
    cpu.regs.a = val;
}

fn inst_out_im8_a(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let port = cpu.args.imm8();
    let val = cpu.regs.a;
    let addr = bits::compose_word(val, port);

    cpu.timed_port_write(bus, addr, val);
    cpu.regs.wz = bits::compose_word(val, port.wrapping_add(1));
}

// ei holds interrupts off until the following instruction has finished;
// di turns them off on the spot.
fn inst_ei(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.iff1 = true;
    cpu.iff2 = true;
    cpu.ei_deferred = true;
}

fn inst_di(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.iff1 = false;
    cpu.iff2 = false;
    cpu.ei_deferred = false;
}

// Extended (ed-prefixed) instructions.

fn inst_neg(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let old_val = cpu.regs.a;

    cpu.regs.a = flags::byte_sub(0, old_val, false, &mut cpu.regs.flags);
}

fn inst_retn(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    cpu.iff1 = cpu.iff2;

    let addr = cpu.pop_word(bus);
    cpu.regs.pc = addr;
    cpu.regs.wz = addr;
}

fn inst_reti(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    cpu.iff1 = cpu.iff2;

    let addr = cpu.pop_word(bus);
    cpu.regs.pc = addr;
    cpu.regs.wz = addr;
}

fn inst_im0(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.im = cpu::InterruptMode::Mode0;
}

fn inst_im1(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.im = cpu::InterruptMode::Mode1;
}

fn inst_im_2(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.im = cpu::InterruptMode::Mode2;
}

fn inst_im_0_slash_1(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    warn!("Interrupt mode set to 0/1, which is undefined.");
    cpu.im = cpu::InterruptMode::ModeUndefined;
}

fn inst_ld_i_a(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.regs.i = cpu.regs.a;
}

// ld r,a is the only write that may change bit 7 of the refresh counter.
fn inst_ld_r_a(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    cpu.regs.r = cpu.regs.a;
}

// ld a,i and ld a,r take P/V from IFF2 as it stands at execution time.
fn inst_ld_a_i(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let new_val = cpu.regs.i;

    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.zero = (new_val == 0);
    cpu.regs.flags.sign = bits::is_byte_negative(new_val);
    cpu.regs.flags.parity_overflow = cpu.iff2;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

fn inst_ld_a_r(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let new_val = cpu.regs.r;

    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.zero = (new_val == 0);
    cpu.regs.flags.sign = bits::is_byte_negative(new_val);
    cpu.regs.flags.parity_overflow = cpu.iff2;
    cpu.regs.flags.set_undoc_xy(new_val);

    cpu.regs.a = new_val;
}

// The nybble rotations between the accumulator and (hl).
fn inst_rrd(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.hl;
    let old_mem = cpu.timed_read_byte(bus, addr);
    let old_a = cpu.regs.a;

    let new_a = (old_a & 0xF0) | bits::low_nybble(old_mem);
    let new_mem = bits::merge_nybbles(old_a, old_mem >> 4);

    flags::in_byte_flags(new_a, &mut cpu.regs.flags);

    cpu.regs.a = new_a;
    cpu.timed_write_byte(bus, addr, new_mem);
    cpu.regs.wz = addr.wrapping_add(1);
}

fn inst_rld(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.hl;
    let old_mem = cpu.timed_read_byte(bus, addr);
    let old_a = cpu.regs.a;

    let new_a = (old_a & 0xF0) | bits::high_nybble(old_mem);
    let new_mem = bits::merge_nybbles(old_mem, old_a);

    flags::in_byte_flags(new_a, &mut cpu.regs.flags);

    cpu.regs.a = new_a;
    cpu.timed_write_byte(bus, addr, new_mem);
    cpu.regs.wz = addr.wrapping_add(1);
}

// in (c): reads the port and sets the flags, but no register receives
// the value.
fn inst_in_mem_bc(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;
    let val = cpu.timed_port_read(bus, addr);

    flags::in_byte_flags(val, &mut cpu.regs.flags);
    cpu.regs.wz = addr.wrapping_add(1);
}

// out (c),0: the NMOS parts drive zero onto the bus.
fn inst_out_mem_bc_0(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;

    cpu.timed_port_write(bus, addr, 0x00);
    cpu.regs.wz = addr.wrapping_add(1);
}

// The block transfer instructions.  S, Z and C survive; X and Y come from
// bits 3 and 1 of the transferred byte plus the accumulator.
fn inst_ldi(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.timed_read_byte(bus, cpu.regs.hl);
    cpu.timed_write_byte(bus, cpu.regs.de, val);

    let new_bc = cpu.regs.bc.wrapping_sub(1);
    cpu.regs.bc = new_bc;
    cpu.regs.de = cpu.regs.de.wrapping_add(1);
    cpu.regs.hl = cpu.regs.hl.wrapping_add(1);

    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.parity_overflow = (new_bc != 0);

    let undoc = val.wrapping_add(cpu.regs.a);
    cpu.regs.flags.undoc_y = (undoc & 0x02) != 0;
    cpu.regs.flags.undoc_x = (undoc & 0x08) != 0;
}

fn inst_ldd(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.timed_read_byte(bus, cpu.regs.hl);
    cpu.timed_write_byte(bus, cpu.regs.de, val);

    let new_bc = cpu.regs.bc.wrapping_sub(1);
    cpu.regs.bc = new_bc;
    cpu.regs.de = cpu.regs.de.wrapping_sub(1);
    cpu.regs.hl = cpu.regs.hl.wrapping_sub(1);

    cpu.regs.flags.half_carry = false;
    cpu.regs.flags.add_sub = false;
    cpu.regs.flags.parity_overflow = (new_bc != 0);

    let undoc = val.wrapping_add(cpu.regs.a);
    cpu.regs.flags.undoc_y = (undoc & 0x02) != 0;
    cpu.regs.flags.undoc_x = (undoc & 0x08) != 0;
}

// The repeating forms re-execute themselves by putting PC back on their
// own first byte, so each iteration is a full instruction cycle and
// interrupts get a look in between iterations.
fn inst_ldir(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_ldi(cpu, bus);

    if cpu.regs.bc != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.regs.wz = cpu.inst_pc.wrapping_add(1);
        cpu.extra_t = 5;
    }
}

fn inst_lddr(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_ldd(cpu, bus);

    if cpu.regs.bc != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.regs.wz = cpu.inst_pc.wrapping_add(1);
        cpu.extra_t = 5;
    }
}

// The block compares.  C survives; X and Y come from the comparison
// result less the half-carry it produced.
fn inst_cpi(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let to_cmp = cpu.timed_read_byte(bus, cpu.regs.hl);
    let old_carry = cpu.regs.flags.carry;
    let result = flags::byte_sub(cpu.regs.a, to_cmp, false, &mut cpu.regs.flags);

    let new_bc = cpu.regs.bc.wrapping_sub(1);
    cpu.regs.bc = new_bc;
    cpu.regs.hl = cpu.regs.hl.wrapping_add(1);

    cpu.regs.flags.carry = old_carry;
    cpu.regs.flags.parity_overflow = (new_bc != 0);

    let undoc = result.wrapping_sub(if cpu.regs.flags.half_carry { 1 } else { 0 });
    cpu.regs.flags.undoc_y = (undoc & 0x02) != 0;
    cpu.regs.flags.undoc_x = (undoc & 0x08) != 0;

    cpu.regs.wz = cpu.regs.wz.wrapping_add(1);
}

fn inst_cpd(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let to_cmp = cpu.timed_read_byte(bus, cpu.regs.hl);
    let old_carry = cpu.regs.flags.carry;
    let result = flags::byte_sub(cpu.regs.a, to_cmp, false, &mut cpu.regs.flags);

    let new_bc = cpu.regs.bc.wrapping_sub(1);
    cpu.regs.bc = new_bc;
    cpu.regs.hl = cpu.regs.hl.wrapping_sub(1);

    cpu.regs.flags.carry = old_carry;
    cpu.regs.flags.parity_overflow = (new_bc != 0);

    let undoc = result.wrapping_sub(if cpu.regs.flags.half_carry { 1 } else { 0 });
    cpu.regs.flags.undoc_y = (undoc & 0x02) != 0;
    cpu.regs.flags.undoc_x = (undoc & 0x08) != 0;

    cpu.regs.wz = cpu.regs.wz.wrapping_sub(1);
}

fn inst_cpir(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_cpi(cpu, bus);

    if (cpu.regs.bc != 0) && !cpu.regs.flags.zero {
        cpu.regs.pc = cpu.inst_pc;
        cpu.regs.wz = cpu.inst_pc.wrapping_add(1);
        cpu.extra_t = 5;
    }
}

fn inst_cpdr(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_cpd(cpu, bus);

    if (cpu.regs.bc != 0) && !cpu.regs.flags.zero {
        cpu.regs.pc = cpu.inst_pc;
        cpu.regs.wz = cpu.inst_pc.wrapping_add(1);
        cpu.extra_t = 5;
    }
}

// Block I/O.  The flag rules are the fully undocumented ones: S, Z, X
// and Y track the decremented B, N is bit 7 of the transferred byte, and
// H, C and P/V fall out of the k sum.
fn block_in_flags(cpu: &mut cpu::CPU, val: u8, k: u16) {
    let new_b = cpu.regs.b();

    cpu.regs.flags.zero = (new_b == 0);
    cpu.regs.flags.sign = bits::is_byte_negative(new_b);
    cpu.regs.flags.set_undoc_xy(new_b);
    cpu.regs.flags.add_sub = (val & 0x80) != 0;
    cpu.regs.flags.half_carry = k > 0xFF;
    cpu.regs.flags.carry = k > 0xFF;
    cpu.regs.flags.parity_overflow = bits::even_parity(((k & 0x07) as u8) ^ new_b);
}

fn inst_ini(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;
    cpu.regs.wz = addr.wrapping_add(1);

    let val = cpu.timed_port_read(bus, addr);
    cpu.timed_write_byte(bus, cpu.regs.hl, val);

    cpu.regs.set_b(cpu.regs.b().wrapping_sub(1));
    cpu.regs.hl = cpu.regs.hl.wrapping_add(1);

    let k = (val as u16) + (cpu.regs.c().wrapping_add(1) as u16);
    block_in_flags(cpu, val, k);
}

fn inst_ind(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let addr = cpu.regs.bc;
    cpu.regs.wz = addr.wrapping_sub(1);

    let val = cpu.timed_port_read(bus, addr);
    cpu.timed_write_byte(bus, cpu.regs.hl, val);

    cpu.regs.set_b(cpu.regs.b().wrapping_sub(1));
    cpu.regs.hl = cpu.regs.hl.wrapping_sub(1);

    let k = (val as u16) + (cpu.regs.c().wrapping_sub(1) as u16);
    block_in_flags(cpu, val, k);
}

fn inst_inir(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_ini(cpu, bus);

    if cpu.regs.b() != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.extra_t = 5;
    }
}

fn inst_indr(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_ind(cpu, bus);

    if cpu.regs.b() != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.extra_t = 5;
    }
}

// On output, B is decremented before it rides the address bus, and the k
// sum uses the new L.
fn inst_outi(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.timed_read_byte(bus, cpu.regs.hl);

    cpu.regs.set_b(cpu.regs.b().wrapping_sub(1));
    let addr = cpu.regs.bc;
    cpu.timed_port_write(bus, addr, val);

    cpu.regs.hl = cpu.regs.hl.wrapping_add(1);
    cpu.regs.wz = addr.wrapping_add(1);

    let k = (val as u16) + (cpu.regs.l() as u16);
    block_in_flags(cpu, val, k);
}

fn inst_outd(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let val = cpu.timed_read_byte(bus, cpu.regs.hl);

    cpu.regs.set_b(cpu.regs.b().wrapping_sub(1));
    let addr = cpu.regs.bc;
    cpu.timed_port_write(bus, addr, val);

    cpu.regs.hl = cpu.regs.hl.wrapping_sub(1);
    cpu.regs.wz = addr.wrapping_sub(1);

    let k = (val as u16) + (cpu.regs.l() as u16);
    block_in_flags(cpu, val, k);
}

fn inst_outir(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_outi(cpu, bus);

    if cpu.regs.b() != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.extra_t = 5;
    }
}

fn inst_outdr(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    inst_outd(cpu, bus);

    if cpu.regs.b() != 0 {
        cpu.regs.pc = cpu.inst_pc;
        cpu.extra_t = 5;
    }
}

// The remaining one-off comparisons.
fn inst_cp_a_im8(cpu: &mut cpu::CPU, _bus: &mut bus::Bus) {
    let operand = cpu.args.imm8();
    flags::byte_cp(cpu.regs.a, operand, &mut cpu.regs.flags);
}

fn inst_cp_a_mem_hl(cpu: &mut cpu::CPU, bus: &mut bus::Bus) {
    let operand = cpu.timed_read_byte(bus, cpu.regs.hl);
    flags::byte_cp(cpu.regs.a, operand, &mut cpu.regs.flags);
}

// The indexed one-offs that had no family to belong to.
ld_mem_idx_im8!(inst_ld_mem_ix_im8_im8, ix);
ld_mem_idx_im8!(inst_ld_mem_iy_im8_im8, iy);
inc_mem_idx!(inst_inc_mem_ix_im8, ix);
inc_mem_idx!(inst_inc_mem_iy_im8, iy);
dec_mem_idx!(inst_dec_mem_ix_im8, ix);
dec_mem_idx!(inst_dec_mem_iy_im8, iy);
cp_a_mem_idx!(inst_cp_a_mem_ix_im8, ix);
cp_a_mem_idx!(inst_cp_a_mem_iy_im8, iy);

// The 8-bit register-to-register loads:
ld_reg_reg!(inst_ld_b_b, set_b, b);
ld_reg_reg!(inst_ld_b_c, set_b, c);
ld_reg_reg!(inst_ld_b_d, set_b, d);
ld_reg_reg!(inst_ld_b_e, set_b, e);
ld_reg_reg!(inst_ld_b_h, set_b, h);
ld_reg_reg!(inst_ld_b_l, set_b, l);
ld_reg_reg!(inst_ld_b_a, set_b, a);
ld_reg_reg!(inst_ld_c_b, set_c, b);
ld_reg_reg!(inst_ld_c_c, set_c, c);
ld_reg_reg!(inst_ld_c_d, set_c, d);
ld_reg_reg!(inst_ld_c_e, set_c, e);
ld_reg_reg!(inst_ld_c_h, set_c, h);
ld_reg_reg!(inst_ld_c_l, set_c, l);
ld_reg_reg!(inst_ld_c_a, set_c, a);
ld_reg_reg!(inst_ld_d_b, set_d, b);
ld_reg_reg!(inst_ld_d_c, set_d, c);
ld_reg_reg!(inst_ld_d_d, set_d, d);
ld_reg_reg!(inst_ld_d_e, set_d, e);
ld_reg_reg!(inst_ld_d_h, set_d, h);
ld_reg_reg!(inst_ld_d_l, set_d, l);
ld_reg_reg!(inst_ld_d_a, set_d, a);
ld_reg_reg!(inst_ld_e_b, set_e, b);
ld_reg_reg!(inst_ld_e_c, set_e, c);
ld_reg_reg!(inst_ld_e_d, set_e, d);
ld_reg_reg!(inst_ld_e_e, set_e, e);
ld_reg_reg!(inst_ld_e_h, set_e, h);
ld_reg_reg!(inst_ld_e_l, set_e, l);
ld_reg_reg!(inst_ld_e_a, set_e, a);
ld_reg_reg!(inst_ld_h_b, set_h, b);
ld_reg_reg!(inst_ld_h_c, set_h, c);
ld_reg_reg!(inst_ld_h_d, set_h, d);
ld_reg_reg!(inst_ld_h_e, set_h, e);
ld_reg_reg!(inst_ld_h_h, set_h, h);
ld_reg_reg!(inst_ld_h_l, set_h, l);
ld_reg_reg!(inst_ld_h_a, set_h, a);
ld_reg_reg!(inst_ld_l_b, set_l, b);
ld_reg_reg!(inst_ld_l_c, set_l, c);
ld_reg_reg!(inst_ld_l_d, set_l, d);
ld_reg_reg!(inst_ld_l_e, set_l, e);
ld_reg_reg!(inst_ld_l_h, set_l, h);
ld_reg_reg!(inst_ld_l_l, set_l, l);
ld_reg_reg!(inst_ld_l_a, set_l, a);
ld_reg_reg!(inst_ld_a_b, set_a, b);
ld_reg_reg!(inst_ld_a_c, set_a, c);
ld_reg_reg!(inst_ld_a_d, set_a, d);
ld_reg_reg!(inst_ld_a_e, set_a, e);
ld_reg_reg!(inst_ld_a_h, set_a, h);
ld_reg_reg!(inst_ld_a_l, set_a, l);
ld_reg_reg!(inst_ld_a_a, set_a, a);

// ... and their undocumented index-half relatives:
ld_reg_reg!(inst_ld_b_ixh, set_b, ixh);
ld_reg_reg!(inst_ld_b_ixl, set_b, ixl);
ld_reg_reg!(inst_ld_c_ixh, set_c, ixh);
ld_reg_reg!(inst_ld_c_ixl, set_c, ixl);
ld_reg_reg!(inst_ld_d_ixh, set_d, ixh);
ld_reg_reg!(inst_ld_d_ixl, set_d, ixl);
ld_reg_reg!(inst_ld_e_ixh, set_e, ixh);
ld_reg_reg!(inst_ld_e_ixl, set_e, ixl);
ld_reg_reg!(inst_ld_a_ixh, set_a, ixh);
ld_reg_reg!(inst_ld_a_ixl, set_a, ixl);
ld_reg_reg!(inst_ld_ixh_b, set_ixh, b);
ld_reg_reg!(inst_ld_ixh_c, set_ixh, c);
ld_reg_reg!(inst_ld_ixh_d, set_ixh, d);
ld_reg_reg!(inst_ld_ixh_e, set_ixh, e);
ld_reg_reg!(inst_ld_ixh_a, set_ixh, a);
ld_reg_reg!(inst_ld_ixh_ixh, set_ixh, ixh);
ld_reg_reg!(inst_ld_ixh_ixl, set_ixh, ixl);
ld_reg_reg!(inst_ld_ixl_b, set_ixl, b);
ld_reg_reg!(inst_ld_ixl_c, set_ixl, c);
ld_reg_reg!(inst_ld_ixl_d, set_ixl, d);
ld_reg_reg!(inst_ld_ixl_e, set_ixl, e);
ld_reg_reg!(inst_ld_ixl_a, set_ixl, a);
ld_reg_reg!(inst_ld_ixl_ixh, set_ixl, ixh);
ld_reg_reg!(inst_ld_ixl_ixl, set_ixl, ixl);
ld_reg_reg!(inst_ld_b_iyh, set_b, iyh);
ld_reg_reg!(inst_ld_b_iyl, set_b, iyl);
ld_reg_reg!(inst_ld_c_iyh, set_c, iyh);
ld_reg_reg!(inst_ld_c_iyl, set_c, iyl);
ld_reg_reg!(inst_ld_d_iyh, set_d, iyh);
ld_reg_reg!(inst_ld_d_iyl, set_d, iyl);
ld_reg_reg!(inst_ld_e_iyh, set_e, iyh);
ld_reg_reg!(inst_ld_e_iyl, set_e, iyl);
ld_reg_reg!(inst_ld_a_iyh, set_a, iyh);
ld_reg_reg!(inst_ld_a_iyl, set_a, iyl);
ld_reg_reg!(inst_ld_iyh_b, set_iyh, b);
ld_reg_reg!(inst_ld_iyh_c, set_iyh, c);
ld_reg_reg!(inst_ld_iyh_d, set_iyh, d);
ld_reg_reg!(inst_ld_iyh_e, set_iyh, e);
ld_reg_reg!(inst_ld_iyh_a, set_iyh, a);
ld_reg_reg!(inst_ld_iyh_iyh, set_iyh, iyh);
ld_reg_reg!(inst_ld_iyh_iyl, set_iyh, iyl);
ld_reg_reg!(inst_ld_iyl_b, set_iyl, b);
ld_reg_reg!(inst_ld_iyl_c, set_iyl, c);
ld_reg_reg!(inst_ld_iyl_d, set_iyl, d);
ld_reg_reg!(inst_ld_iyl_e, set_iyl, e);
ld_reg_reg!(inst_ld_iyl_a, set_iyl, a);
ld_reg_reg!(inst_ld_iyl_iyh, set_iyl, iyh);
ld_reg_reg!(inst_ld_iyl_iyl, set_iyl, iyl);

// Immediate loads:
ld_reg_im8!(inst_ld_b_im8, set_b);
ld_reg_im8!(inst_ld_c_im8, set_c);
ld_reg_im8!(inst_ld_d_im8, set_d);
ld_reg_im8!(inst_ld_e_im8, set_e);
ld_reg_im8!(inst_ld_h_im8, set_h);
ld_reg_im8!(inst_ld_l_im8, set_l);
ld_reg_im8!(inst_ld_a_im8, set_a);
ld_reg_im8!(inst_ld_ixh_im8, set_ixh);
ld_reg_im8!(inst_ld_ixl_im8, set_ixl);
ld_reg_im8!(inst_ld_iyh_im8, set_iyh);
ld_reg_im8!(inst_ld_iyl_im8, set_iyl);

// Loads through (hl), (ix+d) and (iy+d):
ld_reg_mem_hl!(inst_ld_b_mem_hl, set_b);
ld_reg_mem_hl!(inst_ld_c_mem_hl, set_c);
ld_reg_mem_hl!(inst_ld_d_mem_hl, set_d);
ld_reg_mem_hl!(inst_ld_e_mem_hl, set_e);
ld_reg_mem_hl!(inst_ld_h_mem_hl, set_h);
ld_reg_mem_hl!(inst_ld_l_mem_hl, set_l);
ld_reg_mem_hl!(inst_ld_a_mem_hl, set_a);
ld_mem_hl_reg!(inst_ld_mem_hl_b, b);
ld_mem_hl_reg!(inst_ld_mem_hl_c, c);
ld_mem_hl_reg!(inst_ld_mem_hl_d, d);
ld_mem_hl_reg!(inst_ld_mem_hl_e, e);
ld_mem_hl_reg!(inst_ld_mem_hl_h, h);
ld_mem_hl_reg!(inst_ld_mem_hl_l, l);
ld_mem_hl_reg!(inst_ld_mem_hl_a, a);
ld_reg_mem_idx!(inst_ld_b_mem_ix_im8, set_b, ix);
ld_reg_mem_idx!(inst_ld_c_mem_ix_im8, set_c, ix);
ld_reg_mem_idx!(inst_ld_d_mem_ix_im8, set_d, ix);
ld_reg_mem_idx!(inst_ld_e_mem_ix_im8, set_e, ix);
ld_reg_mem_idx!(inst_ld_h_mem_ix_im8, set_h, ix);
ld_reg_mem_idx!(inst_ld_l_mem_ix_im8, set_l, ix);
ld_reg_mem_idx!(inst_ld_a_mem_ix_im8, set_a, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_b, b, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_c, c, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_d, d, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_e, e, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_h, h, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_l, l, ix);
ld_mem_idx_reg!(inst_ld_mem_ix_im8_a, a, ix);
ld_reg_mem_idx!(inst_ld_b_mem_iy_im8, set_b, iy);
ld_reg_mem_idx!(inst_ld_c_mem_iy_im8, set_c, iy);
ld_reg_mem_idx!(inst_ld_d_mem_iy_im8, set_d, iy);
ld_reg_mem_idx!(inst_ld_e_mem_iy_im8, set_e, iy);
ld_reg_mem_idx!(inst_ld_h_mem_iy_im8, set_h, iy);
ld_reg_mem_idx!(inst_ld_l_mem_iy_im8, set_l, iy);
ld_reg_mem_idx!(inst_ld_a_mem_iy_im8, set_a, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_b, b, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_c, c, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_d, d, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_e, e, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_h, h, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_l, l, iy);
ld_mem_idx_reg!(inst_ld_mem_iy_im8_a, a, iy);

// 8-bit increments and decrements:
inc_reg!(inst_inc_b, b, set_b);
dec_reg!(inst_dec_b, b, set_b);
inc_reg!(inst_inc_c, c, set_c);
dec_reg!(inst_dec_c, c, set_c);
inc_reg!(inst_inc_d, d, set_d);
dec_reg!(inst_dec_d, d, set_d);
inc_reg!(inst_inc_e, e, set_e);
dec_reg!(inst_dec_e, e, set_e);
inc_reg!(inst_inc_h, h, set_h);
dec_reg!(inst_dec_h, h, set_h);
inc_reg!(inst_inc_l, l, set_l);
dec_reg!(inst_dec_l, l, set_l);
inc_reg!(inst_inc_a, a, set_a);
dec_reg!(inst_dec_a, a, set_a);
inc_reg!(inst_inc_ixh, ixh, set_ixh);
dec_reg!(inst_dec_ixh, ixh, set_ixh);
inc_reg!(inst_inc_ixl, ixl, set_ixl);
dec_reg!(inst_dec_ixl, ixl, set_ixl);
inc_reg!(inst_inc_iyh, iyh, set_iyh);
dec_reg!(inst_dec_iyh, iyh, set_iyh);
inc_reg!(inst_inc_iyl, iyl, set_iyl);
dec_reg!(inst_dec_iyl, iyl, set_iyl);

// 16-bit increments, decrements and immediate loads:
inc_rr!(inst_inc_bc, bc);
dec_rr!(inst_dec_bc, bc);
inc_rr!(inst_inc_de, de);
dec_rr!(inst_dec_de, de);
inc_rr!(inst_inc_hl, hl);
dec_rr!(inst_dec_hl, hl);
inc_rr!(inst_inc_sp, sp);
dec_rr!(inst_dec_sp, sp);
inc_rr!(inst_inc_ix, ix);
dec_rr!(inst_dec_ix, ix);
inc_rr!(inst_inc_iy, iy);
dec_rr!(inst_dec_iy, iy);
ld_rr_im16!(inst_ld_bc_im16, bc);
ld_rr_im16!(inst_ld_de_im16, de);
ld_rr_im16!(inst_ld_hl_im16, hl);
ld_rr_im16!(inst_ld_sp_im16, sp);
ld_rr_im16!(inst_ld_ix_im16, ix);
ld_rr_im16!(inst_ld_iy_im16, iy);

// 16-bit transfers through a direct address; the hl pair has both the
// classic encoding and its ed duplicate:
ld_mem_im16_rr!(inst_ld_mem_im16_bc, bc);
ld_rr_mem_im16!(inst_ld_bc_mem_im16, bc);
ld_mem_im16_rr!(inst_ld_mem_im16_de, de);
ld_rr_mem_im16!(inst_ld_de_mem_im16, de);
ld_mem_im16_rr!(inst_ld_mem_im16_hl, hl);
ld_rr_mem_im16!(inst_ld_hl_mem_im16, hl);
ld_mem_im16_rr!(inst_ld_mem_im16_sp, sp);
ld_rr_mem_im16!(inst_ld_sp_mem_im16, sp);
ld_mem_im16_rr!(inst_ld_mem_im16_ix, ix);
ld_rr_mem_im16!(inst_ld_ix_mem_im16, ix);
ld_mem_im16_rr!(inst_ld_mem_im16_iy, iy);
ld_rr_mem_im16!(inst_ld_iy_mem_im16, iy);
ld_mem_im16_rr!(inst_ld_mem_im16_hl_2, hl);
ld_rr_mem_im16!(inst_ld_hl_mem_im16_2, hl);
ld_sp_rr!(inst_ld_sp_hl, hl);
ld_sp_rr!(inst_ld_sp_ix, ix);
ld_sp_rr!(inst_ld_sp_iy, iy);

// 16-bit arithmetic:
add_word!(inst_add_hl_bc, hl, bc);
add_word!(inst_add_hl_de, hl, de);
add_word!(inst_add_hl_hl, hl, hl);
add_word!(inst_add_hl_sp, hl, sp);
add_word!(inst_add_ix_bc, ix, bc);
add_word!(inst_add_ix_de, ix, de);
add_word!(inst_add_ix_ix, ix, ix);
add_word!(inst_add_ix_sp, ix, sp);
add_word!(inst_add_iy_bc, iy, bc);
add_word!(inst_add_iy_de, iy, de);
add_word!(inst_add_iy_iy, iy, iy);
add_word!(inst_add_iy_sp, iy, sp);
adc_word!(inst_adc_hl_bc, bc);
sbc_word!(inst_sbc_hl_bc, bc);
adc_word!(inst_adc_hl_de, de);
sbc_word!(inst_sbc_hl_de, de);
adc_word!(inst_adc_hl_hl, hl);
sbc_word!(inst_sbc_hl_hl, hl);
adc_word!(inst_adc_hl_sp, sp);
sbc_word!(inst_sbc_hl_sp, sp);

// The 8-bit accumulator arithmetic and logic:
arith_a_reg!(inst_add_a_b, b, byte_add, false);
arith_a_reg!(inst_add_a_c, c, byte_add, false);
arith_a_reg!(inst_add_a_d, d, byte_add, false);
arith_a_reg!(inst_add_a_e, e, byte_add, false);
arith_a_reg!(inst_add_a_h, h, byte_add, false);
arith_a_reg!(inst_add_a_l, l, byte_add, false);
arith_a_reg!(inst_add_a_a, a, byte_add, false);
arith_a_reg!(inst_add_a_ixh, ixh, byte_add, false);
arith_a_reg!(inst_add_a_ixl, ixl, byte_add, false);
arith_a_reg!(inst_add_a_iyh, iyh, byte_add, false);
arith_a_reg!(inst_add_a_iyl, iyl, byte_add, false);
arith_a_reg!(inst_adc_a_b, b, byte_add, true);
arith_a_reg!(inst_adc_a_c, c, byte_add, true);
arith_a_reg!(inst_adc_a_d, d, byte_add, true);
arith_a_reg!(inst_adc_a_e, e, byte_add, true);
arith_a_reg!(inst_adc_a_h, h, byte_add, true);
arith_a_reg!(inst_adc_a_l, l, byte_add, true);
arith_a_reg!(inst_adc_a_a, a, byte_add, true);
arith_a_reg!(inst_adc_a_ixh, ixh, byte_add, true);
arith_a_reg!(inst_adc_a_ixl, ixl, byte_add, true);
arith_a_reg!(inst_adc_a_iyh, iyh, byte_add, true);
arith_a_reg!(inst_adc_a_iyl, iyl, byte_add, true);
arith_a_reg!(inst_sub_a_b, b, byte_sub, false);
arith_a_reg!(inst_sub_a_c, c, byte_sub, false);
arith_a_reg!(inst_sub_a_d, d, byte_sub, false);
arith_a_reg!(inst_sub_a_e, e, byte_sub, false);
arith_a_reg!(inst_sub_a_h, h, byte_sub, false);
arith_a_reg!(inst_sub_a_l, l, byte_sub, false);
arith_a_reg!(inst_sub_a_a, a, byte_sub, false);
arith_a_reg!(inst_sub_a_ixh, ixh, byte_sub, false);
arith_a_reg!(inst_sub_a_ixl, ixl, byte_sub, false);
arith_a_reg!(inst_sub_a_iyh, iyh, byte_sub, false);
arith_a_reg!(inst_sub_a_iyl, iyl, byte_sub, false);
arith_a_reg!(inst_sbc_a_b, b, byte_sub, true);
arith_a_reg!(inst_sbc_a_c, c, byte_sub, true);
arith_a_reg!(inst_sbc_a_d, d, byte_sub, true);
arith_a_reg!(inst_sbc_a_e, e, byte_sub, true);
arith_a_reg!(inst_sbc_a_h, h, byte_sub, true);
arith_a_reg!(inst_sbc_a_l, l, byte_sub, true);
arith_a_reg!(inst_sbc_a_a, a, byte_sub, true);
arith_a_reg!(inst_sbc_a_ixh, ixh, byte_sub, true);
arith_a_reg!(inst_sbc_a_ixl, ixl, byte_sub, true);
arith_a_reg!(inst_sbc_a_iyh, iyh, byte_sub, true);
arith_a_reg!(inst_sbc_a_iyl, iyl, byte_sub, true);
logic_a_reg!(inst_and_a_b, b, byte_and);
logic_a_reg!(inst_and_a_c, c, byte_and);
logic_a_reg!(inst_and_a_d, d, byte_and);
logic_a_reg!(inst_and_a_e, e, byte_and);
logic_a_reg!(inst_and_a_h, h, byte_and);
logic_a_reg!(inst_and_a_l, l, byte_and);
logic_a_reg!(inst_and_a_a, a, byte_and);
logic_a_reg!(inst_and_a_ixh, ixh, byte_and);
logic_a_reg!(inst_and_a_ixl, ixl, byte_and);
logic_a_reg!(inst_and_a_iyh, iyh, byte_and);
logic_a_reg!(inst_and_a_iyl, iyl, byte_and);
logic_a_reg!(inst_xor_a_b, b, byte_xor);
logic_a_reg!(inst_xor_a_c, c, byte_xor);
logic_a_reg!(inst_xor_a_d, d, byte_xor);
logic_a_reg!(inst_xor_a_e, e, byte_xor);
logic_a_reg!(inst_xor_a_h, h, byte_xor);
logic_a_reg!(inst_xor_a_l, l, byte_xor);
logic_a_reg!(inst_xor_a_a, a, byte_xor);
logic_a_reg!(inst_xor_a_ixh, ixh, byte_xor);
logic_a_reg!(inst_xor_a_ixl, ixl, byte_xor);
logic_a_reg!(inst_xor_a_iyh, iyh, byte_xor);
logic_a_reg!(inst_xor_a_iyl, iyl, byte_xor);
logic_a_reg!(inst_or_a_b, b, byte_or);
logic_a_reg!(inst_or_a_c, c, byte_or);
logic_a_reg!(inst_or_a_d, d, byte_or);
logic_a_reg!(inst_or_a_e, e, byte_or);
logic_a_reg!(inst_or_a_h, h, byte_or);
logic_a_reg!(inst_or_a_l, l, byte_or);
logic_a_reg!(inst_or_a_a, a, byte_or);
logic_a_reg!(inst_or_a_ixh, ixh, byte_or);
logic_a_reg!(inst_or_a_ixl, ixl, byte_or);
logic_a_reg!(inst_or_a_iyh, iyh, byte_or);
logic_a_reg!(inst_or_a_iyl, iyl, byte_or);
cp_a_reg!(inst_cp_a_b, b);
cp_a_reg!(inst_cp_a_c, c);
cp_a_reg!(inst_cp_a_d, d);
cp_a_reg!(inst_cp_a_e, e);
cp_a_reg!(inst_cp_a_h, h);
cp_a_reg!(inst_cp_a_l, l);
cp_a_reg!(inst_cp_a_a, a);
cp_a_reg!(inst_cp_a_ixh, ixh);
cp_a_reg!(inst_cp_a_ixl, ixl);
cp_a_reg!(inst_cp_a_iyh, iyh);
cp_a_reg!(inst_cp_a_iyl, iyl);
arith_a_im8!(inst_add_a_im8, byte_add, false);
arith_a_mem_hl!(inst_add_a_mem_hl, byte_add, false);
arith_a_mem_idx!(inst_add_a_mem_ix_im8, byte_add, false, ix);
arith_a_mem_idx!(inst_add_a_mem_iy_im8, byte_add, false, iy);
arith_a_im8!(inst_adc_a_im8, byte_add, true);
arith_a_mem_hl!(inst_adc_a_mem_hl, byte_add, true);
arith_a_mem_idx!(inst_adc_a_mem_ix_im8, byte_add, true, ix);
arith_a_mem_idx!(inst_adc_a_mem_iy_im8, byte_add, true, iy);
arith_a_im8!(inst_sub_a_im8, byte_sub, false);
arith_a_mem_hl!(inst_sub_a_mem_hl, byte_sub, false);
arith_a_mem_idx!(inst_sub_a_mem_ix_im8, byte_sub, false, ix);
arith_a_mem_idx!(inst_sub_a_mem_iy_im8, byte_sub, false, iy);
arith_a_im8!(inst_sbc_a_im8, byte_sub, true);
arith_a_mem_hl!(inst_sbc_a_mem_hl, byte_sub, true);
arith_a_mem_idx!(inst_sbc_a_mem_ix_im8, byte_sub, true, ix);
arith_a_mem_idx!(inst_sbc_a_mem_iy_im8, byte_sub, true, iy);
logic_a_im8!(inst_and_a_im8, byte_and);
logic_a_mem_hl!(inst_and_a_mem_hl, byte_and);
logic_a_mem_idx!(inst_and_a_mem_ix_im8, byte_and, ix);
logic_a_mem_idx!(inst_and_a_mem_iy_im8, byte_and, iy);
logic_a_im8!(inst_xor_a_im8, byte_xor);
logic_a_mem_hl!(inst_xor_a_mem_hl, byte_xor);
logic_a_mem_idx!(inst_xor_a_mem_ix_im8, byte_xor, ix);
logic_a_mem_idx!(inst_xor_a_mem_iy_im8, byte_xor, iy);
logic_a_im8!(inst_or_a_im8, byte_or);
logic_a_mem_hl!(inst_or_a_mem_hl, byte_or);
logic_a_mem_idx!(inst_or_a_mem_ix_im8, byte_or, ix);
logic_a_mem_idx!(inst_or_a_mem_iy_im8, byte_or, iy);

// The cb-prefixed rotates and shifts:
cb_rot_reg!(inst_rlc_b, b, set_b, rlc_byte);
cb_rot_reg!(inst_rlc_c, c, set_c, rlc_byte);
cb_rot_reg!(inst_rlc_d, d, set_d, rlc_byte);
cb_rot_reg!(inst_rlc_e, e, set_e, rlc_byte);
cb_rot_reg!(inst_rlc_h, h, set_h, rlc_byte);
cb_rot_reg!(inst_rlc_l, l, set_l, rlc_byte);
cb_rot_reg!(inst_rlc_a, a, set_a, rlc_byte);
cb_rot_mem_hl!(inst_rlc_mem_hl, rlc_byte);
cb_rot_reg!(inst_rrc_b, b, set_b, rrc_byte);
cb_rot_reg!(inst_rrc_c, c, set_c, rrc_byte);
cb_rot_reg!(inst_rrc_d, d, set_d, rrc_byte);
cb_rot_reg!(inst_rrc_e, e, set_e, rrc_byte);
cb_rot_reg!(inst_rrc_h, h, set_h, rrc_byte);
cb_rot_reg!(inst_rrc_l, l, set_l, rrc_byte);
cb_rot_reg!(inst_rrc_a, a, set_a, rrc_byte);
cb_rot_mem_hl!(inst_rrc_mem_hl, rrc_byte);
cb_rot_reg!(inst_rl_b, b, set_b, rl_byte);
cb_rot_reg!(inst_rl_c, c, set_c, rl_byte);
cb_rot_reg!(inst_rl_d, d, set_d, rl_byte);
cb_rot_reg!(inst_rl_e, e, set_e, rl_byte);
cb_rot_reg!(inst_rl_h, h, set_h, rl_byte);
cb_rot_reg!(inst_rl_l, l, set_l, rl_byte);
cb_rot_reg!(inst_rl_a, a, set_a, rl_byte);
cb_rot_mem_hl!(inst_rl_mem_hl, rl_byte);
cb_rot_reg!(inst_rr_b, b, set_b, rr_byte);
cb_rot_reg!(inst_rr_c, c, set_c, rr_byte);
cb_rot_reg!(inst_rr_d, d, set_d, rr_byte);
cb_rot_reg!(inst_rr_e, e, set_e, rr_byte);
cb_rot_reg!(inst_rr_h, h, set_h, rr_byte);
cb_rot_reg!(inst_rr_l, l, set_l, rr_byte);
cb_rot_reg!(inst_rr_a, a, set_a, rr_byte);
cb_rot_mem_hl!(inst_rr_mem_hl, rr_byte);
cb_rot_reg!(inst_sla_b, b, set_b, sla_byte);
cb_rot_reg!(inst_sla_c, c, set_c, sla_byte);
cb_rot_reg!(inst_sla_d, d, set_d, sla_byte);
cb_rot_reg!(inst_sla_e, e, set_e, sla_byte);
cb_rot_reg!(inst_sla_h, h, set_h, sla_byte);
cb_rot_reg!(inst_sla_l, l, set_l, sla_byte);
cb_rot_reg!(inst_sla_a, a, set_a, sla_byte);
cb_rot_mem_hl!(inst_sla_mem_hl, sla_byte);
cb_rot_reg!(inst_sra_b, b, set_b, sra_byte);
cb_rot_reg!(inst_sra_c, c, set_c, sra_byte);
cb_rot_reg!(inst_sra_d, d, set_d, sra_byte);
cb_rot_reg!(inst_sra_e, e, set_e, sra_byte);
cb_rot_reg!(inst_sra_h, h, set_h, sra_byte);
cb_rot_reg!(inst_sra_l, l, set_l, sra_byte);
cb_rot_reg!(inst_sra_a, a, set_a, sra_byte);
cb_rot_mem_hl!(inst_sra_mem_hl, sra_byte);
cb_rot_reg!(inst_sll_b, b, set_b, sll_byte);
cb_rot_reg!(inst_sll_c, c, set_c, sll_byte);
cb_rot_reg!(inst_sll_d, d, set_d, sll_byte);
cb_rot_reg!(inst_sll_e, e, set_e, sll_byte);
cb_rot_reg!(inst_sll_h, h, set_h, sll_byte);
cb_rot_reg!(inst_sll_l, l, set_l, sll_byte);
cb_rot_reg!(inst_sll_a, a, set_a, sll_byte);
cb_rot_mem_hl!(inst_sll_mem_hl, sll_byte);
cb_rot_reg!(inst_srl_b, b, set_b, srl_byte);
cb_rot_reg!(inst_srl_c, c, set_c, srl_byte);
cb_rot_reg!(inst_srl_d, d, set_d, srl_byte);
cb_rot_reg!(inst_srl_e, e, set_e, srl_byte);
cb_rot_reg!(inst_srl_h, h, set_h, srl_byte);
cb_rot_reg!(inst_srl_l, l, set_l, srl_byte);
cb_rot_reg!(inst_srl_a, a, set_a, srl_byte);
cb_rot_mem_hl!(inst_srl_mem_hl, srl_byte);

// Bit testing, clearing and setting:
cb_bit_reg!(inst_bit_0_b, 0, b);
cb_bit_reg!(inst_bit_0_c, 0, c);
cb_bit_reg!(inst_bit_0_d, 0, d);
cb_bit_reg!(inst_bit_0_e, 0, e);
cb_bit_reg!(inst_bit_0_h, 0, h);
cb_bit_reg!(inst_bit_0_l, 0, l);
cb_bit_reg!(inst_bit_0_a, 0, a);
cb_bit_mem_hl!(inst_bit_0_mem_hl, 0);
cb_bit_reg!(inst_bit_1_b, 1, b);
cb_bit_reg!(inst_bit_1_c, 1, c);
cb_bit_reg!(inst_bit_1_d, 1, d);
cb_bit_reg!(inst_bit_1_e, 1, e);
cb_bit_reg!(inst_bit_1_h, 1, h);
cb_bit_reg!(inst_bit_1_l, 1, l);
cb_bit_reg!(inst_bit_1_a, 1, a);
cb_bit_mem_hl!(inst_bit_1_mem_hl, 1);
cb_bit_reg!(inst_bit_2_b, 2, b);
cb_bit_reg!(inst_bit_2_c, 2, c);
cb_bit_reg!(inst_bit_2_d, 2, d);
cb_bit_reg!(inst_bit_2_e, 2, e);
cb_bit_reg!(inst_bit_2_h, 2, h);
cb_bit_reg!(inst_bit_2_l, 2, l);
cb_bit_reg!(inst_bit_2_a, 2, a);
cb_bit_mem_hl!(inst_bit_2_mem_hl, 2);
cb_bit_reg!(inst_bit_3_b, 3, b);
cb_bit_reg!(inst_bit_3_c, 3, c);
cb_bit_reg!(inst_bit_3_d, 3, d);
cb_bit_reg!(inst_bit_3_e, 3, e);
cb_bit_reg!(inst_bit_3_h, 3, h);
cb_bit_reg!(inst_bit_3_l, 3, l);
cb_bit_reg!(inst_bit_3_a, 3, a);
cb_bit_mem_hl!(inst_bit_3_mem_hl, 3);
cb_bit_reg!(inst_bit_4_b, 4, b);
cb_bit_reg!(inst_bit_4_c, 4, c);
cb_bit_reg!(inst_bit_4_d, 4, d);
cb_bit_reg!(inst_bit_4_e, 4, e);
cb_bit_reg!(inst_bit_4_h, 4, h);
cb_bit_reg!(inst_bit_4_l, 4, l);
cb_bit_reg!(inst_bit_4_a, 4, a);
cb_bit_mem_hl!(inst_bit_4_mem_hl, 4);
cb_bit_reg!(inst_bit_5_b, 5, b);
cb_bit_reg!(inst_bit_5_c, 5, c);
cb_bit_reg!(inst_bit_5_d, 5, d);
cb_bit_reg!(inst_bit_5_e, 5, e);
cb_bit_reg!(inst_bit_5_h, 5, h);
cb_bit_reg!(inst_bit_5_l, 5, l);
cb_bit_reg!(inst_bit_5_a, 5, a);
cb_bit_mem_hl!(inst_bit_5_mem_hl, 5);
cb_bit_reg!(inst_bit_6_b, 6, b);
cb_bit_reg!(inst_bit_6_c, 6, c);
cb_bit_reg!(inst_bit_6_d, 6, d);
cb_bit_reg!(inst_bit_6_e, 6, e);
cb_bit_reg!(inst_bit_6_h, 6, h);
cb_bit_reg!(inst_bit_6_l, 6, l);
cb_bit_reg!(inst_bit_6_a, 6, a);
cb_bit_mem_hl!(inst_bit_6_mem_hl, 6);
cb_bit_reg!(inst_bit_7_b, 7, b);
cb_bit_reg!(inst_bit_7_c, 7, c);
cb_bit_reg!(inst_bit_7_d, 7, d);
cb_bit_reg!(inst_bit_7_e, 7, e);
cb_bit_reg!(inst_bit_7_h, 7, h);
cb_bit_reg!(inst_bit_7_l, 7, l);
cb_bit_reg!(inst_bit_7_a, 7, a);
cb_bit_mem_hl!(inst_bit_7_mem_hl, 7);
cb_res_reg!(inst_res_0_b, 0, b, set_b);
cb_res_reg!(inst_res_0_c, 0, c, set_c);
cb_res_reg!(inst_res_0_d, 0, d, set_d);
cb_res_reg!(inst_res_0_e, 0, e, set_e);
cb_res_reg!(inst_res_0_h, 0, h, set_h);
cb_res_reg!(inst_res_0_l, 0, l, set_l);
cb_res_reg!(inst_res_0_a, 0, a, set_a);
cb_res_mem_hl!(inst_res_0_mem_hl, 0);
cb_res_reg!(inst_res_1_b, 1, b, set_b);
cb_res_reg!(inst_res_1_c, 1, c, set_c);
cb_res_reg!(inst_res_1_d, 1, d, set_d);
cb_res_reg!(inst_res_1_e, 1, e, set_e);
cb_res_reg!(inst_res_1_h, 1, h, set_h);
cb_res_reg!(inst_res_1_l, 1, l, set_l);
cb_res_reg!(inst_res_1_a, 1, a, set_a);
cb_res_mem_hl!(inst_res_1_mem_hl, 1);
cb_res_reg!(inst_res_2_b, 2, b, set_b);
cb_res_reg!(inst_res_2_c, 2, c, set_c);
cb_res_reg!(inst_res_2_d, 2, d, set_d);
cb_res_reg!(inst_res_2_e, 2, e, set_e);
cb_res_reg!(inst_res_2_h, 2, h, set_h);
cb_res_reg!(inst_res_2_l, 2, l, set_l);
cb_res_reg!(inst_res_2_a, 2, a, set_a);
cb_res_mem_hl!(inst_res_2_mem_hl, 2);
cb_res_reg!(inst_res_3_b, 3, b, set_b);
cb_res_reg!(inst_res_3_c, 3, c, set_c);
cb_res_reg!(inst_res_3_d, 3, d, set_d);
cb_res_reg!(inst_res_3_e, 3, e, set_e);
cb_res_reg!(inst_res_3_h, 3, h, set_h);
cb_res_reg!(inst_res_3_l, 3, l, set_l);
cb_res_reg!(inst_res_3_a, 3, a, set_a);
cb_res_mem_hl!(inst_res_3_mem_hl, 3);
cb_res_reg!(inst_res_4_b, 4, b, set_b);
cb_res_reg!(inst_res_4_c, 4, c, set_c);
cb_res_reg!(inst_res_4_d, 4, d, set_d);
cb_res_reg!(inst_res_4_e, 4, e, set_e);
cb_res_reg!(inst_res_4_h, 4, h, set_h);
cb_res_reg!(inst_res_4_l, 4, l, set_l);
cb_res_reg!(inst_res_4_a, 4, a, set_a);
cb_res_mem_hl!(inst_res_4_mem_hl, 4);
cb_res_reg!(inst_res_5_b, 5, b, set_b);
cb_res_reg!(inst_res_5_c, 5, c, set_c);
cb_res_reg!(inst_res_5_d, 5, d, set_d);
cb_res_reg!(inst_res_5_e, 5, e, set_e);
cb_res_reg!(inst_res_5_h, 5, h, set_h);
cb_res_reg!(inst_res_5_l, 5, l, set_l);
cb_res_reg!(inst_res_5_a, 5, a, set_a);
cb_res_mem_hl!(inst_res_5_mem_hl, 5);
cb_res_reg!(inst_res_6_b, 6, b, set_b);
cb_res_reg!(inst_res_6_c, 6, c, set_c);
cb_res_reg!(inst_res_6_d, 6, d, set_d);
cb_res_reg!(inst_res_6_e, 6, e, set_e);
cb_res_reg!(inst_res_6_h, 6, h, set_h);
cb_res_reg!(inst_res_6_l, 6, l, set_l);
cb_res_reg!(inst_res_6_a, 6, a, set_a);
cb_res_mem_hl!(inst_res_6_mem_hl, 6);
cb_res_reg!(inst_res_7_b, 7, b, set_b);
cb_res_reg!(inst_res_7_c, 7, c, set_c);
cb_res_reg!(inst_res_7_d, 7, d, set_d);
cb_res_reg!(inst_res_7_e, 7, e, set_e);
cb_res_reg!(inst_res_7_h, 7, h, set_h);
cb_res_reg!(inst_res_7_l, 7, l, set_l);
cb_res_reg!(inst_res_7_a, 7, a, set_a);
cb_res_mem_hl!(inst_res_7_mem_hl, 7);
cb_set_reg!(inst_set_0_b, 0, b, set_b);
cb_set_reg!(inst_set_0_c, 0, c, set_c);
cb_set_reg!(inst_set_0_d, 0, d, set_d);
cb_set_reg!(inst_set_0_e, 0, e, set_e);
cb_set_reg!(inst_set_0_h, 0, h, set_h);
cb_set_reg!(inst_set_0_l, 0, l, set_l);
cb_set_reg!(inst_set_0_a, 0, a, set_a);
cb_set_mem_hl!(inst_set_0_mem_hl, 0);
cb_set_reg!(inst_set_1_b, 1, b, set_b);
cb_set_reg!(inst_set_1_c, 1, c, set_c);
cb_set_reg!(inst_set_1_d, 1, d, set_d);
cb_set_reg!(inst_set_1_e, 1, e, set_e);
cb_set_reg!(inst_set_1_h, 1, h, set_h);
cb_set_reg!(inst_set_1_l, 1, l, set_l);
cb_set_reg!(inst_set_1_a, 1, a, set_a);
cb_set_mem_hl!(inst_set_1_mem_hl, 1);
cb_set_reg!(inst_set_2_b, 2, b, set_b);
cb_set_reg!(inst_set_2_c, 2, c, set_c);
cb_set_reg!(inst_set_2_d, 2, d, set_d);
cb_set_reg!(inst_set_2_e, 2, e, set_e);
cb_set_reg!(inst_set_2_h, 2, h, set_h);
cb_set_reg!(inst_set_2_l, 2, l, set_l);
cb_set_reg!(inst_set_2_a, 2, a, set_a);
cb_set_mem_hl!(inst_set_2_mem_hl, 2);
cb_set_reg!(inst_set_3_b, 3, b, set_b);
cb_set_reg!(inst_set_3_c, 3, c, set_c);
cb_set_reg!(inst_set_3_d, 3, d, set_d);
cb_set_reg!(inst_set_3_e, 3, e, set_e);
cb_set_reg!(inst_set_3_h, 3, h, set_h);
cb_set_reg!(inst_set_3_l, 3, l, set_l);
cb_set_reg!(inst_set_3_a, 3, a, set_a);
cb_set_mem_hl!(inst_set_3_mem_hl, 3);
cb_set_reg!(inst_set_4_b, 4, b, set_b);
cb_set_reg!(inst_set_4_c, 4, c, set_c);
cb_set_reg!(inst_set_4_d, 4, d, set_d);
cb_set_reg!(inst_set_4_e, 4, e, set_e);
cb_set_reg!(inst_set_4_h, 4, h, set_h);
cb_set_reg!(inst_set_4_l, 4, l, set_l);
cb_set_reg!(inst_set_4_a, 4, a, set_a);
cb_set_mem_hl!(inst_set_4_mem_hl, 4);
cb_set_reg!(inst_set_5_b, 5, b, set_b);
cb_set_reg!(inst_set_5_c, 5, c, set_c);
cb_set_reg!(inst_set_5_d, 5, d, set_d);
cb_set_reg!(inst_set_5_e, 5, e, set_e);
cb_set_reg!(inst_set_5_h, 5, h, set_h);
cb_set_reg!(inst_set_5_l, 5, l, set_l);
cb_set_reg!(inst_set_5_a, 5, a, set_a);
cb_set_mem_hl!(inst_set_5_mem_hl, 5);
cb_set_reg!(inst_set_6_b, 6, b, set_b);
cb_set_reg!(inst_set_6_c, 6, c, set_c);
cb_set_reg!(inst_set_6_d, 6, d, set_d);
cb_set_reg!(inst_set_6_e, 6, e, set_e);
cb_set_reg!(inst_set_6_h, 6, h, set_h);
cb_set_reg!(inst_set_6_l, 6, l, set_l);
cb_set_reg!(inst_set_6_a, 6, a, set_a);
cb_set_mem_hl!(inst_set_6_mem_hl, 6);
cb_set_reg!(inst_set_7_b, 7, b, set_b);
cb_set_reg!(inst_set_7_c, 7, c, set_c);
cb_set_reg!(inst_set_7_d, 7, d, set_d);
cb_set_reg!(inst_set_7_e, 7, e, set_e);
cb_set_reg!(inst_set_7_h, 7, h, set_h);
cb_set_reg!(inst_set_7_l, 7, l, set_l);
cb_set_reg!(inst_set_7_a, 7, a, set_a);
cb_set_mem_hl!(inst_set_7_mem_hl, 7);

// The ddcb/fdcb rotates and shifts, plain and register-copying:
idx_rot_mem!(inst_rlc_mem_ix_im8, rlc_byte);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_b, rlc_byte, set_b);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_c, rlc_byte, set_c);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_d, rlc_byte, set_d);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_e, rlc_byte, set_e);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_h, rlc_byte, set_h);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_l, rlc_byte, set_l);
idx_rot_mem_copy!(inst_rlc_mem_ix_im8_a, rlc_byte, set_a);
idx_rot_mem!(inst_rrc_mem_ix_im8, rrc_byte);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_b, rrc_byte, set_b);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_c, rrc_byte, set_c);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_d, rrc_byte, set_d);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_e, rrc_byte, set_e);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_h, rrc_byte, set_h);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_l, rrc_byte, set_l);
idx_rot_mem_copy!(inst_rrc_mem_ix_im8_a, rrc_byte, set_a);
idx_rot_mem!(inst_rl_mem_ix_im8, rl_byte);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_b, rl_byte, set_b);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_c, rl_byte, set_c);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_d, rl_byte, set_d);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_e, rl_byte, set_e);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_h, rl_byte, set_h);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_l, rl_byte, set_l);
idx_rot_mem_copy!(inst_rl_mem_ix_im8_a, rl_byte, set_a);
idx_rot_mem!(inst_rr_mem_ix_im8, rr_byte);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_b, rr_byte, set_b);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_c, rr_byte, set_c);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_d, rr_byte, set_d);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_e, rr_byte, set_e);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_h, rr_byte, set_h);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_l, rr_byte, set_l);
idx_rot_mem_copy!(inst_rr_mem_ix_im8_a, rr_byte, set_a);
idx_rot_mem!(inst_sla_mem_ix_im8, sla_byte);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_b, sla_byte, set_b);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_c, sla_byte, set_c);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_d, sla_byte, set_d);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_e, sla_byte, set_e);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_h, sla_byte, set_h);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_l, sla_byte, set_l);
idx_rot_mem_copy!(inst_sla_mem_ix_im8_a, sla_byte, set_a);
idx_rot_mem!(inst_sra_mem_ix_im8, sra_byte);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_b, sra_byte, set_b);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_c, sra_byte, set_c);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_d, sra_byte, set_d);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_e, sra_byte, set_e);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_h, sra_byte, set_h);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_l, sra_byte, set_l);
idx_rot_mem_copy!(inst_sra_mem_ix_im8_a, sra_byte, set_a);
idx_rot_mem!(inst_sll_mem_ix_im8, sll_byte);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_b, sll_byte, set_b);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_c, sll_byte, set_c);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_d, sll_byte, set_d);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_e, sll_byte, set_e);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_h, sll_byte, set_h);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_l, sll_byte, set_l);
idx_rot_mem_copy!(inst_sll_mem_ix_im8_a, sll_byte, set_a);
idx_rot_mem!(inst_srl_mem_ix_im8, srl_byte);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_b, srl_byte, set_b);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_c, srl_byte, set_c);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_d, srl_byte, set_d);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_e, srl_byte, set_e);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_h, srl_byte, set_h);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_l, srl_byte, set_l);
idx_rot_mem_copy!(inst_srl_mem_ix_im8_a, srl_byte, set_a);
idx_rot_mem!(inst_rlc_mem_iy_im8, rlc_byte);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_b, rlc_byte, set_b);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_c, rlc_byte, set_c);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_d, rlc_byte, set_d);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_e, rlc_byte, set_e);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_h, rlc_byte, set_h);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_l, rlc_byte, set_l);
idx_rot_mem_copy!(inst_rlc_mem_iy_im8_a, rlc_byte, set_a);
idx_rot_mem!(inst_rrc_mem_iy_im8, rrc_byte);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_b, rrc_byte, set_b);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_c, rrc_byte, set_c);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_d, rrc_byte, set_d);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_e, rrc_byte, set_e);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_h, rrc_byte, set_h);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_l, rrc_byte, set_l);
idx_rot_mem_copy!(inst_rrc_mem_iy_im8_a, rrc_byte, set_a);
idx_rot_mem!(inst_rl_mem_iy_im8, rl_byte);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_b, rl_byte, set_b);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_c, rl_byte, set_c);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_d, rl_byte, set_d);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_e, rl_byte, set_e);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_h, rl_byte, set_h);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_l, rl_byte, set_l);
idx_rot_mem_copy!(inst_rl_mem_iy_im8_a, rl_byte, set_a);
idx_rot_mem!(inst_rr_mem_iy_im8, rr_byte);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_b, rr_byte, set_b);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_c, rr_byte, set_c);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_d, rr_byte, set_d);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_e, rr_byte, set_e);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_h, rr_byte, set_h);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_l, rr_byte, set_l);
idx_rot_mem_copy!(inst_rr_mem_iy_im8_a, rr_byte, set_a);
idx_rot_mem!(inst_sla_mem_iy_im8, sla_byte);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_b, sla_byte, set_b);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_c, sla_byte, set_c);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_d, sla_byte, set_d);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_e, sla_byte, set_e);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_h, sla_byte, set_h);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_l, sla_byte, set_l);
idx_rot_mem_copy!(inst_sla_mem_iy_im8_a, sla_byte, set_a);
idx_rot_mem!(inst_sra_mem_iy_im8, sra_byte);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_b, sra_byte, set_b);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_c, sra_byte, set_c);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_d, sra_byte, set_d);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_e, sra_byte, set_e);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_h, sra_byte, set_h);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_l, sra_byte, set_l);
idx_rot_mem_copy!(inst_sra_mem_iy_im8_a, sra_byte, set_a);
idx_rot_mem!(inst_sll_mem_iy_im8, sll_byte);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_b, sll_byte, set_b);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_c, sll_byte, set_c);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_d, sll_byte, set_d);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_e, sll_byte, set_e);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_h, sll_byte, set_h);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_l, sll_byte, set_l);
idx_rot_mem_copy!(inst_sll_mem_iy_im8_a, sll_byte, set_a);
idx_rot_mem!(inst_srl_mem_iy_im8, srl_byte);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_b, srl_byte, set_b);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_c, srl_byte, set_c);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_d, srl_byte, set_d);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_e, srl_byte, set_e);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_h, srl_byte, set_h);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_l, srl_byte, set_l);
idx_rot_mem_copy!(inst_srl_mem_iy_im8_a, srl_byte, set_a);

// ... their bit tests (the register columns all behave alike):
idx_bit_mem!(inst_bit_0_mem_ix_im8, 0);
idx_bit_mem!(inst_bit_1_mem_ix_im8, 1);
idx_bit_mem!(inst_bit_2_mem_ix_im8, 2);
idx_bit_mem!(inst_bit_3_mem_ix_im8, 3);
idx_bit_mem!(inst_bit_4_mem_ix_im8, 4);
idx_bit_mem!(inst_bit_5_mem_ix_im8, 5);
idx_bit_mem!(inst_bit_6_mem_ix_im8, 6);
idx_bit_mem!(inst_bit_7_mem_ix_im8, 7);
idx_bit_mem!(inst_bit_0_mem_iy_im8, 0);
idx_bit_mem!(inst_bit_1_mem_iy_im8, 1);
idx_bit_mem!(inst_bit_2_mem_iy_im8, 2);
idx_bit_mem!(inst_bit_3_mem_iy_im8, 3);
idx_bit_mem!(inst_bit_4_mem_iy_im8, 4);
idx_bit_mem!(inst_bit_5_mem_iy_im8, 5);
idx_bit_mem!(inst_bit_6_mem_iy_im8, 6);
idx_bit_mem!(inst_bit_7_mem_iy_im8, 7);

// ... and their bit clears and sets:
idx_res_mem!(inst_res_0_mem_ix_im8, 0);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_b, 0, set_b);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_c, 0, set_c);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_d, 0, set_d);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_e, 0, set_e);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_h, 0, set_h);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_l, 0, set_l);
idx_res_mem_copy!(inst_res_0_mem_ix_im8_a, 0, set_a);
idx_res_mem!(inst_res_1_mem_ix_im8, 1);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_b, 1, set_b);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_c, 1, set_c);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_d, 1, set_d);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_e, 1, set_e);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_h, 1, set_h);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_l, 1, set_l);
idx_res_mem_copy!(inst_res_1_mem_ix_im8_a, 1, set_a);
idx_res_mem!(inst_res_2_mem_ix_im8, 2);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_b, 2, set_b);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_c, 2, set_c);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_d, 2, set_d);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_e, 2, set_e);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_h, 2, set_h);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_l, 2, set_l);
idx_res_mem_copy!(inst_res_2_mem_ix_im8_a, 2, set_a);
idx_res_mem!(inst_res_3_mem_ix_im8, 3);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_b, 3, set_b);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_c, 3, set_c);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_d, 3, set_d);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_e, 3, set_e);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_h, 3, set_h);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_l, 3, set_l);
idx_res_mem_copy!(inst_res_3_mem_ix_im8_a, 3, set_a);
idx_res_mem!(inst_res_4_mem_ix_im8, 4);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_b, 4, set_b);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_c, 4, set_c);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_d, 4, set_d);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_e, 4, set_e);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_h, 4, set_h);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_l, 4, set_l);
idx_res_mem_copy!(inst_res_4_mem_ix_im8_a, 4, set_a);
idx_res_mem!(inst_res_5_mem_ix_im8, 5);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_b, 5, set_b);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_c, 5, set_c);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_d, 5, set_d);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_e, 5, set_e);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_h, 5, set_h);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_l, 5, set_l);
idx_res_mem_copy!(inst_res_5_mem_ix_im8_a, 5, set_a);
idx_res_mem!(inst_res_6_mem_ix_im8, 6);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_b, 6, set_b);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_c, 6, set_c);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_d, 6, set_d);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_e, 6, set_e);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_h, 6, set_h);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_l, 6, set_l);
idx_res_mem_copy!(inst_res_6_mem_ix_im8_a, 6, set_a);
idx_res_mem!(inst_res_7_mem_ix_im8, 7);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_b, 7, set_b);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_c, 7, set_c);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_d, 7, set_d);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_e, 7, set_e);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_h, 7, set_h);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_l, 7, set_l);
idx_res_mem_copy!(inst_res_7_mem_ix_im8_a, 7, set_a);
idx_set_mem!(inst_set_0_mem_ix_im8, 0);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_b, 0, set_b);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_c, 0, set_c);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_d, 0, set_d);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_e, 0, set_e);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_h, 0, set_h);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_l, 0, set_l);
idx_set_mem_copy!(inst_set_0_mem_ix_im8_a, 0, set_a);
idx_set_mem!(inst_set_1_mem_ix_im8, 1);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_b, 1, set_b);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_c, 1, set_c);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_d, 1, set_d);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_e, 1, set_e);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_h, 1, set_h);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_l, 1, set_l);
idx_set_mem_copy!(inst_set_1_mem_ix_im8_a, 1, set_a);
idx_set_mem!(inst_set_2_mem_ix_im8, 2);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_b, 2, set_b);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_c, 2, set_c);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_d, 2, set_d);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_e, 2, set_e);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_h, 2, set_h);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_l, 2, set_l);
idx_set_mem_copy!(inst_set_2_mem_ix_im8_a, 2, set_a);
idx_set_mem!(inst_set_3_mem_ix_im8, 3);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_b, 3, set_b);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_c, 3, set_c);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_d, 3, set_d);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_e, 3, set_e);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_h, 3, set_h);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_l, 3, set_l);
idx_set_mem_copy!(inst_set_3_mem_ix_im8_a, 3, set_a);
idx_set_mem!(inst_set_4_mem_ix_im8, 4);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_b, 4, set_b);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_c, 4, set_c);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_d, 4, set_d);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_e, 4, set_e);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_h, 4, set_h);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_l, 4, set_l);
idx_set_mem_copy!(inst_set_4_mem_ix_im8_a, 4, set_a);
idx_set_mem!(inst_set_5_mem_ix_im8, 5);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_b, 5, set_b);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_c, 5, set_c);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_d, 5, set_d);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_e, 5, set_e);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_h, 5, set_h);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_l, 5, set_l);
idx_set_mem_copy!(inst_set_5_mem_ix_im8_a, 5, set_a);
idx_set_mem!(inst_set_6_mem_ix_im8, 6);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_b, 6, set_b);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_c, 6, set_c);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_d, 6, set_d);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_e, 6, set_e);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_h, 6, set_h);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_l, 6, set_l);
idx_set_mem_copy!(inst_set_6_mem_ix_im8_a, 6, set_a);
idx_set_mem!(inst_set_7_mem_ix_im8, 7);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_b, 7, set_b);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_c, 7, set_c);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_d, 7, set_d);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_e, 7, set_e);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_h, 7, set_h);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_l, 7, set_l);
idx_set_mem_copy!(inst_set_7_mem_ix_im8_a, 7, set_a);
idx_res_mem!(inst_res_0_mem_iy_im8, 0);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_b, 0, set_b);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_c, 0, set_c);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_d, 0, set_d);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_e, 0, set_e);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_h, 0, set_h);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_l, 0, set_l);
idx_res_mem_copy!(inst_res_0_mem_iy_im8_a, 0, set_a);
idx_res_mem!(inst_res_1_mem_iy_im8, 1);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_b, 1, set_b);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_c, 1, set_c);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_d, 1, set_d);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_e, 1, set_e);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_h, 1, set_h);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_l, 1, set_l);
idx_res_mem_copy!(inst_res_1_mem_iy_im8_a, 1, set_a);
idx_res_mem!(inst_res_2_mem_iy_im8, 2);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_b, 2, set_b);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_c, 2, set_c);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_d, 2, set_d);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_e, 2, set_e);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_h, 2, set_h);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_l, 2, set_l);
idx_res_mem_copy!(inst_res_2_mem_iy_im8_a, 2, set_a);
idx_res_mem!(inst_res_3_mem_iy_im8, 3);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_b, 3, set_b);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_c, 3, set_c);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_d, 3, set_d);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_e, 3, set_e);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_h, 3, set_h);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_l, 3, set_l);
idx_res_mem_copy!(inst_res_3_mem_iy_im8_a, 3, set_a);
idx_res_mem!(inst_res_4_mem_iy_im8, 4);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_b, 4, set_b);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_c, 4, set_c);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_d, 4, set_d);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_e, 4, set_e);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_h, 4, set_h);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_l, 4, set_l);
idx_res_mem_copy!(inst_res_4_mem_iy_im8_a, 4, set_a);
idx_res_mem!(inst_res_5_mem_iy_im8, 5);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_b, 5, set_b);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_c, 5, set_c);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_d, 5, set_d);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_e, 5, set_e);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_h, 5, set_h);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_l, 5, set_l);
idx_res_mem_copy!(inst_res_5_mem_iy_im8_a, 5, set_a);
idx_res_mem!(inst_res_6_mem_iy_im8, 6);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_b, 6, set_b);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_c, 6, set_c);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_d, 6, set_d);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_e, 6, set_e);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_h, 6, set_h);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_l, 6, set_l);
idx_res_mem_copy!(inst_res_6_mem_iy_im8_a, 6, set_a);
idx_res_mem!(inst_res_7_mem_iy_im8, 7);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_b, 7, set_b);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_c, 7, set_c);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_d, 7, set_d);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_e, 7, set_e);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_h, 7, set_h);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_l, 7, set_l);
idx_res_mem_copy!(inst_res_7_mem_iy_im8_a, 7, set_a);
idx_set_mem!(inst_set_0_mem_iy_im8, 0);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_b, 0, set_b);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_c, 0, set_c);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_d, 0, set_d);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_e, 0, set_e);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_h, 0, set_h);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_l, 0, set_l);
idx_set_mem_copy!(inst_set_0_mem_iy_im8_a, 0, set_a);
idx_set_mem!(inst_set_1_mem_iy_im8, 1);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_b, 1, set_b);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_c, 1, set_c);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_d, 1, set_d);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_e, 1, set_e);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_h, 1, set_h);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_l, 1, set_l);
idx_set_mem_copy!(inst_set_1_mem_iy_im8_a, 1, set_a);
idx_set_mem!(inst_set_2_mem_iy_im8, 2);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_b, 2, set_b);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_c, 2, set_c);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_d, 2, set_d);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_e, 2, set_e);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_h, 2, set_h);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_l, 2, set_l);
idx_set_mem_copy!(inst_set_2_mem_iy_im8_a, 2, set_a);
idx_set_mem!(inst_set_3_mem_iy_im8, 3);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_b, 3, set_b);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_c, 3, set_c);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_d, 3, set_d);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_e, 3, set_e);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_h, 3, set_h);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_l, 3, set_l);
idx_set_mem_copy!(inst_set_3_mem_iy_im8_a, 3, set_a);
idx_set_mem!(inst_set_4_mem_iy_im8, 4);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_b, 4, set_b);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_c, 4, set_c);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_d, 4, set_d);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_e, 4, set_e);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_h, 4, set_h);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_l, 4, set_l);
idx_set_mem_copy!(inst_set_4_mem_iy_im8_a, 4, set_a);
idx_set_mem!(inst_set_5_mem_iy_im8, 5);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_b, 5, set_b);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_c, 5, set_c);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_d, 5, set_d);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_e, 5, set_e);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_h, 5, set_h);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_l, 5, set_l);
idx_set_mem_copy!(inst_set_5_mem_iy_im8_a, 5, set_a);
idx_set_mem!(inst_set_6_mem_iy_im8, 6);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_b, 6, set_b);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_c, 6, set_c);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_d, 6, set_d);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_e, 6, set_e);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_h, 6, set_h);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_l, 6, set_l);
idx_set_mem_copy!(inst_set_6_mem_iy_im8_a, 6, set_a);
idx_set_mem!(inst_set_7_mem_iy_im8, 7);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_b, 7, set_b);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_c, 7, set_c);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_d, 7, set_d);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_e, 7, set_e);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_h, 7, set_h);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_l, 7, set_l);
idx_set_mem_copy!(inst_set_7_mem_iy_im8_a, 7, set_a);

// Conditional control flow:
jr_cc!(inst_jr_nz_im8, cond_nz);
jr_cc!(inst_jr_z_im8, cond_z);
jr_cc!(inst_jr_nc_im8, cond_nc);
jr_cc!(inst_jr_c_im8, cond_c);
jp_cc!(inst_jp_nz_im16, cond_nz);
jp_cc!(inst_jp_z_im16, cond_z);
jp_cc!(inst_jp_nc_im16, cond_nc);
jp_cc!(inst_jp_c_im16, cond_c);
jp_cc!(inst_jp_po_im16, cond_po);
jp_cc!(inst_jp_pe_im16, cond_pe);
jp_cc!(inst_jp_p_im16, cond_p);
jp_cc!(inst_jp_m_im16, cond_m);
call_cc!(inst_call_nz_im16, cond_nz);
call_cc!(inst_call_z_im16, cond_z);
call_cc!(inst_call_nc_im16, cond_nc);
call_cc!(inst_call_c_im16, cond_c);
call_cc!(inst_call_po_im16, cond_po);
call_cc!(inst_call_pe_im16, cond_pe);
call_cc!(inst_call_p_im16, cond_p);
call_cc!(inst_call_m_im16, cond_m);
ret_cc!(inst_ret_nz, cond_nz);
ret_cc!(inst_ret_z, cond_z);
ret_cc!(inst_ret_nc, cond_nc);
ret_cc!(inst_ret_c, cond_c);
ret_cc!(inst_ret_po, cond_po);
ret_cc!(inst_ret_pe, cond_pe);
ret_cc!(inst_ret_p, cond_p);
ret_cc!(inst_ret_m, cond_m);

// Restarts:
rst!(inst_rst_00h, 0x0000);
rst!(inst_rst_08h, 0x0008);
rst!(inst_rst_10h, 0x0010);
rst!(inst_rst_18h, 0x0018);
rst!(inst_rst_20h, 0x0020);
rst!(inst_rst_28h, 0x0028);
rst!(inst_rst_30h, 0x0030);
rst!(inst_rst_38h, 0x0038);

// Stack pushes and pops (af has its own routines):
push_rr!(inst_push_bc, bc);
pop_rr!(inst_pop_bc, bc);
push_rr!(inst_push_de, de);
pop_rr!(inst_pop_de, de);
push_rr!(inst_push_hl, hl);
pop_rr!(inst_pop_hl, hl);
push_rr!(inst_push_ix, ix);
pop_rr!(inst_pop_ix, ix);
push_rr!(inst_push_iy, iy);
pop_rr!(inst_pop_iy, iy);

// Port I/O through the BC register:
in_reg_mem_bc!(inst_in_b_mem_bc, set_b);
in_reg_mem_bc!(inst_in_c_mem_bc, set_c);
in_reg_mem_bc!(inst_in_d_mem_bc, set_d);
in_reg_mem_bc!(inst_in_e_mem_bc, set_e);
in_reg_mem_bc!(inst_in_h_mem_bc, set_h);
in_reg_mem_bc!(inst_in_l_mem_bc, set_l);
in_reg_mem_bc!(inst_in_a_mem_bc, set_a);
out_mem_bc_reg!(inst_out_mem_bc_b, b);
out_mem_bc_reg!(inst_out_mem_bc_c, c);
out_mem_bc_reg!(inst_out_mem_bc_d, d);
out_mem_bc_reg!(inst_out_mem_bc_e, e);
out_mem_bc_reg!(inst_out_mem_bc_h, h);
out_mem_bc_reg!(inst_out_mem_bc_l, l);
out_mem_bc_reg!(inst_out_mem_bc_a, a);

// Stack-top exchanges and register-indirect jumps:
ex_mem_sp_rr!(inst_ex_mem_sp_hl, hl);
ex_mem_sp_rr!(inst_ex_mem_sp_ix, ix);
ex_mem_sp_rr!(inst_ex_mem_sp_iy, iy);
jp_rr!(inst_jp_hl, hl);
jp_rr!(inst_jp_ix, ix);
jp_rr!(inst_jp_iy, iy);

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

// The programmer-visible register file, the shadow set, and the internal
// WZ latch (known elsewhere as MEMPTR).  Pairs are stored as 16-bit words
// with byte views layered on top; the accumulator and flags live apart
// from each other, as they do in the ALU.

use crate::bits;
use crate::z80::flags::Flags;

#[derive(Clone, Debug, Default)]
pub struct Regs {
    pub pc: u16,
    pub sp: u16,
    pub ix: u16,
    pub iy: u16,
    pub wz: u16,
    pub i:  u8,
    pub r:  u8,

    pub a:  u8,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub flags: Flags,

    pub a_prime:  u8,
    pub bc_prime: u16,
    pub de_prime: u16,
    pub hl_prime: u16,
    pub flags_prime: Flags,
}

impl Regs {
    pub fn new() -> Regs {
        Regs::default()
    }

    // Byte views over the stored pairs.

    // The accumulator also gets accessor spellings, so the macro-stamped
    // instruction families can treat all eight registers alike.
    pub fn a(&self) -> u8 { self.a }
    pub fn set_a(&mut self, val: u8) { self.a = val; }

    pub fn b(&self) -> u8 { bits::high_byte(self.bc) }
    pub fn c(&self) -> u8 { bits::low_byte(self.bc) }
    pub fn d(&self) -> u8 { bits::high_byte(self.de) }
    pub fn e(&self) -> u8 { bits::low_byte(self.de) }
    pub fn h(&self) -> u8 { bits::high_byte(self.hl) }
    pub fn l(&self) -> u8 { bits::low_byte(self.hl) }

    pub fn set_b(&mut self, val: u8) { self.bc = bits::with_high_byte(self.bc, val); }
    pub fn set_c(&mut self, val: u8) { self.bc = bits::with_low_byte(self.bc, val); }
    pub fn set_d(&mut self, val: u8) { self.de = bits::with_high_byte(self.de, val); }
    pub fn set_e(&mut self, val: u8) { self.de = bits::with_low_byte(self.de, val); }
    pub fn set_h(&mut self, val: u8) { self.hl = bits::with_high_byte(self.hl, val); }
    pub fn set_l(&mut self, val: u8) { self.hl = bits::with_low_byte(self.hl, val); }

    // The individually addressable halves of the index registers.

    pub fn ixh(&self) -> u8 { bits::high_byte(self.ix) }
    pub fn ixl(&self) -> u8 { bits::low_byte(self.ix) }
    pub fn iyh(&self) -> u8 { bits::high_byte(self.iy) }
    pub fn iyl(&self) -> u8 { bits::low_byte(self.iy) }

    pub fn set_ixh(&mut self, val: u8) { self.ix = bits::with_high_byte(self.ix, val); }
    pub fn set_ixl(&mut self, val: u8) { self.ix = bits::with_low_byte(self.ix, val); }
    pub fn set_iyh(&mut self, val: u8) { self.iy = bits::with_high_byte(self.iy, val); }
    pub fn set_iyl(&mut self, val: u8) { self.iy = bits::with_low_byte(self.iy, val); }

    // The halves of the internal WZ latch, W on top.

    pub fn w(&self) -> u8 { bits::high_byte(self.wz) }
    pub fn z(&self) -> u8 { bits::low_byte(self.wz) }

    pub fn set_w(&mut self, val: u8) { self.wz = bits::with_high_byte(self.wz, val); }
    pub fn set_z(&mut self, val: u8) { self.wz = bits::with_low_byte(self.wz, val); }

    // A paired with F, the way push af stores them.

    pub fn af(&self) -> u16 {
        bits::compose_word(self.a, self.flags.to_byte())
    }

    pub fn set_af(&mut self, val: u16) {
        self.a = bits::high_byte(val);
        self.flags = Flags::from_byte(bits::low_byte(val));
    }

    pub fn set_flags(&mut self, byte: u8) {
        self.flags = Flags::from_byte(byte);
    }

    // Swap AF with its shadow.  The whole pair moves at once.
    pub fn exchange_af(&mut self) {
        std::mem::swap(&mut self.a, &mut self.a_prime);
        std::mem::swap(&mut self.flags, &mut self.flags_prime);
    }

    // The exx exchange: BC, DE and HL swap with their shadows.
    pub fn exchange_main_set(&mut self) {
        std::mem::swap(&mut self.bc, &mut self.bc_prime);
        std::mem::swap(&mut self.de, &mut self.de_prime);
        std::mem::swap(&mut self.hl, &mut self.hl_prime);
    }

    // A value copy of the whole file, for hosts and debuggers.
    pub fn snapshot(&self) -> Regs {
        self.clone()
    }

    // The reset state: everything cleared except the stack pointer,
    // which the silicon leaves at the configured top of memory.
    pub fn clear(&mut self, stack_top: u16) {
        *self = Regs::default();
        self.sp = stack_top;
    }

    // The refresh counter steps through its low seven bits after every
    // opcode fetch; bit 7 only ever changes through ld r,a.
    pub fn refresh_r(&mut self) {
        self.r = (self.r & 0x80) | (self.r.wrapping_add(1) & 0x7F);
    }
}

// The register encoding used by the low three bits of much of the opcode
// map.  Encoding 6 is the (HL) memory operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    MemHl,
    A,
}

pub fn register_by_opcode(opcode: u8) -> Reg8 {
    match opcode & 0x07 {
        0 => Reg8::B,
        1 => Reg8::C,
        2 => Reg8::D,
        3 => Reg8::E,
        4 => Reg8::H,
        5 => Reg8::L,
        6 => Reg8::MemHl,
        _ => Reg8::A,
    }
}

impl Regs {
    // Indexed access for hosts; the (HL) sentinel has no register value.
    pub fn read_reg8(&self, reg: Reg8) -> Option<u8> {
        match reg {
            Reg8::B => Some(self.b()),
            Reg8::C => Some(self.c()),
            Reg8::D => Some(self.d()),
            Reg8::E => Some(self.e()),
            Reg8::H => Some(self.h()),
            Reg8::L => Some(self.l()),
            Reg8::MemHl => None,
            Reg8::A => Some(self.a),
        }
    }

    pub fn write_reg8(&mut self, reg: Reg8, val: u8) -> bool {
        match reg {
            Reg8::B => self.set_b(val),
            Reg8::C => self.set_c(val),
            Reg8::D => self.set_d(val),
            Reg8::E => self.set_e(val),
            Reg8::H => self.set_h(val),
            Reg8::L => self.set_l(val),
            Reg8::MemHl => return false,
            Reg8::A => self.a = val,
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_views_pack_and_unpack() {
        let mut regs = Regs::new();
        regs.bc = 0x1234;
        assert_eq!(regs.b(), 0x12);
        assert_eq!(regs.c(), 0x34);

        regs.set_b(0xAB);
        regs.set_c(0xCD);
        assert_eq!(regs.bc, 0xABCD);

        regs.ix = 0x5678;
        assert_eq!(regs.ixh(), 0x56);
        assert_eq!(regs.ixl(), 0x78);
        regs.set_ixh(0x9A);
        regs.set_iyl(0x11);
        assert_eq!(regs.ix, 0x9A78);
        assert_eq!(regs.iy, 0x0011);

        regs.wz = 0xC3D4;
        assert_eq!(regs.w(), 0xC3);
        assert_eq!(regs.z(), 0xD4);
        regs.set_w(0xE5);
        regs.set_z(0xF6);
        assert_eq!(regs.wz, 0xE5F6);
    }

    #[test]
    fn af_packs_the_flag_byte() {
        let mut regs = Regs::new();
        regs.a = 0x12;
        regs.set_flags(0b1010_0101);
        assert_eq!(regs.af(), 0x12A5);

        regs.set_af(0x3400);
        assert_eq!(regs.a, 0x34);
        assert_eq!(regs.flags.to_byte(), 0x00);
    }

    // Both exchanges are involutions: applied twice, nothing moved.
    #[test]
    fn exchanges_are_involutions() {
        let mut regs = Regs::new();
        regs.a = 0x11;
        regs.set_flags(0x22);
        regs.bc = 0x3333;
        regs.de = 0x4444;
        regs.hl = 0x5555;
        regs.a_prime = 0x66;
        regs.bc_prime = 0x7777;

        let before = regs.snapshot();

        regs.exchange_af();
        assert_eq!(regs.a, 0x66);
        assert_eq!(regs.a_prime, 0x11);
        regs.exchange_af();

        regs.exchange_main_set();
        assert_eq!(regs.bc, 0x7777);
        assert_eq!(regs.hl, 0x0000);
        regs.exchange_main_set();

        assert_eq!(regs.a, before.a);
        assert_eq!(regs.flags.to_byte(), before.flags.to_byte());
        assert_eq!(regs.bc, before.bc);
        assert_eq!(regs.de, before.de);
        assert_eq!(regs.hl, before.hl);
        assert_eq!(regs.bc_prime, before.bc_prime);
    }

    #[test]
    fn clear_spares_only_the_stack_pointer() {
        let mut regs = Regs::new();
        regs.pc = 0x1234;
        regs.a = 0xFF;
        regs.hl = 0xFFFF;
        regs.r = 0xAA;
        regs.wz = 0x5555;

        regs.clear(0xFFFF);
        assert_eq!(regs.sp, 0xFFFF);
        assert_eq!(regs.pc, 0x0000);
        assert_eq!(regs.a, 0x00);
        assert_eq!(regs.hl, 0x0000);
        assert_eq!(regs.r, 0x00);
        assert_eq!(regs.wz, 0x0000);
        assert_eq!(regs.flags.to_byte(), 0x00);
    }

    // Refresh never touches bit 7; only ld r,a can.
    #[test]
    fn refresh_preserves_bit_7() {
        let mut regs = Regs::new();
        regs.r = 0x80 | 0x7F;
        regs.refresh_r();
        assert_eq!(regs.r, 0x80);

        regs.r = 0x7F;
        regs.refresh_r();
        assert_eq!(regs.r, 0x00);

        regs.r = 0xAA;
        for _ in 0..256 {
            regs.refresh_r();
            assert_eq!(regs.r & 0x80, 0x80);
        }
    }

    #[test]
    fn opcode_register_encoding() {
        assert_eq!(register_by_opcode(0x78), Reg8::B); // ld a,b
        assert_eq!(register_by_opcode(0x41), Reg8::C);
        assert_eq!(register_by_opcode(0x7E), Reg8::MemHl);
        assert_eq!(register_by_opcode(0x87), Reg8::A);

        let mut regs = Regs::new();
        regs.bc = 0xBBCC;
        assert_eq!(regs.read_reg8(Reg8::B), Some(0xBB));
        assert_eq!(regs.read_reg8(Reg8::MemHl), None);
        assert!(regs.write_reg8(Reg8::E, 0xEE));
        assert_eq!(regs.de, 0x00EE);
        assert!(!regs.write_reg8(Reg8::MemHl, 0x00));
    }
}

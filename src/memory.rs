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

// The 64K address space, built out of non-overlapping memory segments.
//
// All of the accessors here are untimed: they move bytes without touching
// the clock.  Timed access - the kind the executing CPU performs - is
// layered on top by the processor itself, which runs the machine-cycle
// timer and then comes here for the data.
//
// Reads from addresses no segment claims yield 0x00; writes to such
// addresses, or to read-only segments, are dropped.  On the real bus the
// write strobe simply has no one listening to it.

use log::{info, warn, error};

use crate::errors::{CoreError, Result};

pub const ADDRESS_SPACE_SIZE: u32 = 0x1_0000;

// A single run of bytes at a fixed place in the address space.
pub struct MemorySegment {
    id:          String,
    start_addr:  u16,
    read_only:   bool,
    data:        Box<[u8]>,
}

impl MemorySegment {
    // Create a new ram segment, zero-filled.  The size is a u32 so a
    // single segment can span the whole 64K space.
    pub fn ram(id: String, start_addr: u16, size: u32) -> MemorySegment {
        let segment = MemorySegment {
            id,
            start_addr,
            read_only: false,
            data: vec![0x00; size as usize].into_boxed_slice(),
        };

        if (size % 1024) == 0 {
            info!("Created ram segment `{}', starting address: 0x{:04X}, size: {}K.", segment.id, start_addr, size / 1024);
        } else {
            info!("Created ram segment `{}', starting address: 0x{:04X}, size: {} bytes.", segment.id, start_addr, size);
        }

        segment
    }

    // Create a new rom segment holding the given image.
    pub fn rom(id: String, start_addr: u16, image: &[u8]) -> MemorySegment {
        let segment = MemorySegment {
            id,
            start_addr,
            read_only: true,
            data: image.to_vec().into_boxed_slice(),
        };

        info!("Created rom segment `{}', starting address: 0x{:04X}, size: {} bytes.", segment.id, start_addr, image.len());

        segment
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_address(&self) -> u16 {
        self.start_addr
    }

    pub fn size_in_bytes(&self) -> u32 {
        self.data.len() as u32
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn contains(&self, addr: u16) -> bool {
        addr >= self.start_addr && ((addr as u32) < (self.start_addr as u32) + (self.data.len() as u32))
    }

    pub fn read_byte(&self, offset: u16) -> u8 {
        if (offset as usize) < self.data.len() {
            self.data[offset as usize]
        } else {
            panic!("Failed read: Offset 0x{:04X} is invalid for memory segment `{}'", offset, self.id);
        }
    }

    pub fn read_bytes(&self, offset: u16, count: usize) -> &[u8] {
        let start = offset as usize;
        let end = (start + count).min(self.data.len());
        &self.data[start..end]
    }

    pub fn write_byte(&mut self, offset: u16, val: u8) {
        if (offset as usize) >= self.data.len() {
            panic!("Failed write: Offset 0x{:04X} is invalid for memory segment `{}'", offset, self.id);
        }
        if self.read_only {
            warn!("Dropped write of 0x{:02X} to read-only segment `{}', offset 0x{:04X}.", val, self.id, offset);
        } else {
            self.data[offset as usize] = val;
        }
    }

    pub fn write_bytes(&mut self, offset: u16, bytes: &[u8]) {
        for (index, val) in bytes.iter().enumerate() {
            let target = (offset as usize) + index;
            if target >= self.data.len() {
                break;
            }
            self.write_byte(target as u16, *val);
        }
    }

    // Erase the contents of a writable segment.
    pub fn wipe(&mut self) {
        if self.read_only {
            return;
        }
        for byte in self.data.iter_mut() {
            *byte = 0x00;
        }
        info!("The memory segment `{}' was wiped.", self.id);
    }
}

// An ordered collection of non-overlapping segments covering some subset
// of the address space.
pub struct MemoryMap {
    segments: Vec<MemorySegment>,
}

impl MemoryMap {
    pub fn new() -> MemoryMap {
        MemoryMap {
            segments: Vec::new(),
        }
    }

    // Insert a segment, keeping the collection sorted by start address.
    // A segment that would overlap an existing one is rejected.
    pub fn add_segment(&mut self, segment: MemorySegment) -> bool {
        let new_start = segment.start_addr as u32;
        let new_end = new_start + (segment.data.len() as u32);

        if new_end > ADDRESS_SPACE_SIZE {
            error!("Rejected memory segment `{}': 0x{:04X}..0x{:X} runs past the end of the address space.", segment.id, segment.start_addr, new_end);
            return false;
        }
        for existing in self.segments.iter() {
            let start = existing.start_addr as u32;
            let end = start + (existing.data.len() as u32);

            if new_start < end && start < new_end {
                error!("Rejected memory segment `{}': it overlaps segment `{}'.", segment.id, existing.id);
                return false;
            }
        }
        let insert_at = self.segments.iter()
            .position(|existing| existing.start_addr > segment.start_addr)
            .unwrap_or(self.segments.len());
        self.segments.insert(insert_at, segment);

        true
    }

    pub fn segment_for(&self, addr: u16) -> Option<&MemorySegment> {
        self.segments.iter().find(|segment| segment.contains(addr))
    }

    pub fn segment_for_mut(&mut self, addr: u16) -> Option<&mut MemorySegment> {
        self.segments.iter_mut().find(|segment| segment.contains(addr))
    }

    pub fn segments(&self) -> &[MemorySegment] {
        &self.segments
    }

    // Total number of mapped bytes, not necessarily contiguous.
    pub fn size_in_bytes(&self) -> u32 {
        self.segments.iter().map(|segment| segment.data.len() as u32).sum()
    }

    pub fn clear_all_writable(&mut self) {
        for segment in self.segments.iter_mut() {
            segment.wipe();
        }
    }
}

// The memory bank the CPU executes against.  It starts life unbound;
// every operation before bind() reports MemoryNotInitialised.
pub struct MemoryBank {
    map: Option<MemoryMap>,
}

impl MemoryBank {
    pub fn new() -> MemoryBank {
        MemoryBank {
            map: None,
        }
    }

    pub fn with_map(map: MemoryMap) -> MemoryBank {
        let mut bank = MemoryBank::new();
        bank.bind(map);

        bank
    }

    pub fn bind(&mut self, map: MemoryMap) {
        info!("Bound a memory map of {} mapped bytes to the memory bank.", map.size_in_bytes());
        self.map = Some(map);
    }

    pub fn is_bound(&self) -> bool {
        self.map.is_some()
    }

    pub fn map(&self) -> Result<&MemoryMap> {
        self.map.as_ref().ok_or(CoreError::MemoryNotInitialised)
    }

    pub fn map_mut(&mut self) -> Result<&mut MemoryMap> {
        self.map.as_mut().ok_or(CoreError::MemoryNotInitialised)
    }

    // The untimed, host-facing accessors.

    pub fn read_byte(&self, addr: u16) -> Result<u8> {
        self.map()?;
        Ok(self.read_byte_raw(addr))
    }

    // A read that would cross the end of the address space is truncated
    // to the bytes that exist.
    pub fn read_bytes(&self, addr: u16, count: usize) -> Result<Vec<u8>> {
        self.map()?;

        let available = (ADDRESS_SPACE_SIZE - (addr as u32)) as usize;
        let count = count.min(available);

        let mut bytes = Vec::with_capacity(count);
        for index in 0..count {
            bytes.push(self.read_byte_raw(addr + (index as u16)));
        }
        Ok(bytes)
    }

    pub fn read_word(&self, addr: u16) -> Result<u16> {
        self.map()?;
        Ok(self.read_word_raw(addr))
    }

    pub fn write_byte(&mut self, addr: u16, val: u8) -> Result<()> {
        self.map()?;
        self.write_byte_raw(addr, val);
        Ok(())
    }

    pub fn write_bytes(&mut self, addr: u16, bytes: &[u8]) -> Result<()> {
        self.map()?;
        for (index, val) in bytes.iter().enumerate() {
            let target = (addr as u32) + (index as u32);
            if target >= ADDRESS_SPACE_SIZE {
                warn!("{} bytes of a {}-byte write at 0x{:04X} ran past the end of the address space.", bytes.len() - index, bytes.len(), addr);
                break;
            }
            self.write_byte_raw(target as u16, *val);
        }
        Ok(())
    }

    pub fn write_word(&mut self, addr: u16, val: u16) -> Result<()> {
        self.map()?;
        self.write_word_raw(addr, val);
        Ok(())
    }

    // The host VM's program-loading entry point.
    pub fn load_from_buffer(&mut self, addr: u16, buffer: &[u8], buffer_name: &str) -> Result<()> {
        self.write_bytes(addr, buffer)?;
        info!("Loaded {} bytes from `{}' at 0x{:04X}.", buffer.len(), buffer_name, addr);
        Ok(())
    }

    // The raw accessors the executing engine uses once it has verified
    // the bank is bound.  Unmapped reads float low, bad writes drop.

    pub(crate) fn read_byte_raw(&self, addr: u16) -> u8 {
        let map = match self.map.as_ref() {
            Some(map) => map,
            None => return 0x00,
        };
        match map.segment_for(addr) {
            Some(segment) => segment.read_byte(addr - segment.start_address()),
            None => {
                warn!("Read from address 0x{:04X}, which doesn't belong to any memory segment.", addr);
                0x00
            },
        }
    }

    pub(crate) fn write_byte_raw(&mut self, addr: u16, val: u8) {
        let map = match self.map.as_mut() {
            Some(map) => map,
            None => return,
        };
        match map.segment_for_mut(addr) {
            Some(segment) => {
                let offset = addr - segment.start_address();
                segment.write_byte(offset, val);
            },
            None => {
                warn!("Dropped write of 0x{:02X} to address 0x{:04X}, which doesn't belong to any memory segment.", val, addr);
            },
        }
    }

    // Words are little-endian, low byte first; an access at 0xFFFF wraps
    // for its high byte, as the address bus does.
    pub(crate) fn read_word_raw(&self, addr: u16) -> u16 {
        let lsb = self.read_byte_raw(addr);
        let msb = self.read_byte_raw(addr.wrapping_add(1));

        ((msb as u16) << 8) | (lsb as u16)
    }

    pub(crate) fn write_word_raw(&mut self, addr: u16, val: u16) {
        self.write_byte_raw(addr, (val & 0xFF) as u8);
        self.write_byte_raw(addr.wrapping_add(1), ((val >> 8) & 0xFF) as u8);
    }

    // Grab up to four bytes at the given address for the decoder.  The
    // second value is how many of them actually exist; a prefetch at the
    // very top of the address space comes back short.
    pub(crate) fn prefetch(&self, addr: u16) -> ([u8; 4], usize) {
        let available = ((ADDRESS_SPACE_SIZE - (addr as u32)) as usize).min(4);
        let mut bytes = [0x00; 4];

        for index in 0..available {
            bytes[index] = self.read_byte_raw(addr + (index as u16));
        }
        (bytes, available)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn test_bank() -> MemoryBank {
        let mut map = MemoryMap::new();
        map.add_segment(MemorySegment::rom("rom".to_owned(), 0x0000, &[0xC3, 0x00, 0x10, 0xFF]));
        map.add_segment(MemorySegment::ram("ram".to_owned(), 0x1000, 0x1000));

        MemoryBank::with_map(map)
    }

    #[test]
    fn unbound_bank_reports_not_initialised() {
        let mut bank = MemoryBank::new();
        assert_eq!(bank.read_byte(0x0000), Err(CoreError::MemoryNotInitialised));
        assert_eq!(bank.write_byte(0x0000, 0x42), Err(CoreError::MemoryNotInitialised));
        assert_eq!(bank.read_word(0x0000), Err(CoreError::MemoryNotInitialised));
    }

    #[test]
    fn overlapping_segments_are_rejected() {
        let mut map = MemoryMap::new();
        assert!(map.add_segment(MemorySegment::ram("a".to_owned(), 0x0000, 0x100)));
        assert!(!map.add_segment(MemorySegment::ram("b".to_owned(), 0x00FF, 0x100)));
        assert!(map.add_segment(MemorySegment::ram("c".to_owned(), 0x0100, 0x100)));
    }

    #[test]
    fn unmapped_reads_float_low() {
        let bank = test_bank();
        assert_eq!(bank.read_byte(0x8000).unwrap(), 0x00);
    }

    #[test]
    fn read_only_writes_are_dropped() {
        let mut bank = test_bank();
        bank.write_byte(0x0000, 0x42).unwrap();
        assert_eq!(bank.read_byte(0x0000).unwrap(), 0xC3);
    }

    #[test]
    fn words_are_little_endian() {
        let mut bank = test_bank();
        bank.write_word(0x1000, 0xABCD).unwrap();
        assert_eq!(bank.read_byte(0x1000).unwrap(), 0xCD);
        assert_eq!(bank.read_byte(0x1001).unwrap(), 0xAB);
        assert_eq!(bank.read_word(0x1000).unwrap(), 0xABCD);

        // A word read decomposes into its two byte reads.
        let composed = (bank.read_byte(0x1000).unwrap() as u16)
            | ((bank.read_byte(0x1001).unwrap() as u16) << 8);
        assert_eq!(bank.read_word(0x1000).unwrap(), composed);
    }

    #[test]
    fn bulk_reads_truncate_at_the_top() {
        let mut map = MemoryMap::new();
        map.add_segment(MemorySegment::ram("high".to_owned(), 0xFFF0, 0x10));
        let bank = MemoryBank::with_map(map);

        assert_eq!(bank.read_bytes(0xFFFE, 4).unwrap().len(), 2);

        let (_, available) = bank.prefetch(0xFFFE);
        assert_eq!(available, 2);
    }

    #[test]
    fn clear_all_writable_spares_rom() {
        let mut bank = test_bank();
        bank.write_byte(0x1234, 0x99).unwrap();
        bank.map_mut().unwrap().clear_all_writable();
        assert_eq!(bank.read_byte(0x1234).unwrap(), 0x00);
        assert_eq!(bank.read_byte(0x0000).unwrap(), 0xC3);
    }

    #[test]
    fn segment_lookup() {
        let bank = test_bank();
        let map = bank.map().unwrap();
        assert_eq!(map.segment_for(0x0002).unwrap().id(), "rom");
        assert_eq!(map.segment_for(0x1FFF).unwrap().id(), "ram");
        assert!(map.segment_for(0x9000).is_none());
        assert_eq!(map.size_in_bytes(), 0x1004);
    }
}

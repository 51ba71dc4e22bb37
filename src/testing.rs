use crate::fat::pack;
use crate::io::Memory;
use crate::region::directory::{ENTRY_SIZE, RawEntry};

const SECTOR_SIZE: usize = 512;
const RESERVED_SECTORS: usize = 1;
const SECTORS_PER_FAT: usize = 9;
const NUMBER_OF_FATS: usize = 2;
const ROOT_ENTRIES: usize = 192;
const TOTAL_SECTORS: usize = 80;
const ROOT_SECTOR: usize = RESERVED_SECTORS + NUMBER_OF_FATS * SECTORS_PER_FAT;
const FIRST_DATA_SECTOR: usize = ROOT_SECTOR + ROOT_ENTRIES * ENTRY_SIZE / SECTOR_SIZE;

/// Record with given 11 byte name, timestamps zeroed
pub(crate) fn entry(name: &[u8; 11], attributes: u8, cluster: u16, size: u32) -> RawEntry {
    let mut raw = [0u8; ENTRY_SIZE];
    raw[..11].copy_from_slice(name);
    raw[11] = attributes;
    raw[26..28].copy_from_slice(&cluster.to_le_bytes());
    raw[28..].copy_from_slice(&size.to_le_bytes());
    raw
}

/// Floppy-like image, one sector per cluster, first data sector 31
pub(crate) struct Image {
    bytes: Vec<u8>,
    fat: Vec<u16>,
}

impl Image {
    pub fn new() -> Self {
        let mut bytes = vec![0u8; TOTAL_SECTORS * SECTOR_SIZE];
        bytes[..11].copy_from_slice(&hex!("EB 3C 90 4D 53 57 49 4E 34 2E 31"));
        bytes[11..13].copy_from_slice(&(SECTOR_SIZE as u16).to_le_bytes());
        bytes[13] = 1;
        bytes[14..16].copy_from_slice(&(RESERVED_SECTORS as u16).to_le_bytes());
        bytes[16] = NUMBER_OF_FATS as u8;
        bytes[17..19].copy_from_slice(&(ROOT_ENTRIES as u16).to_le_bytes());
        bytes[19..21].copy_from_slice(&(TOTAL_SECTORS as u16).to_le_bytes());
        bytes[21] = 0xF0;
        bytes[22..24].copy_from_slice(&(SECTORS_PER_FAT as u16).to_le_bytes());
        bytes[24..26].copy_from_slice(&18u16.to_le_bytes());
        bytes[26..28].copy_from_slice(&2u16.to_le_bytes());
        bytes[38] = 0x29;
        bytes[39..43].copy_from_slice(&hex!("78 56 34 12"));
        bytes[43..54].copy_from_slice(b"TESTVOLUME ");
        bytes[54..62].copy_from_slice(b"FAT12   ");
        bytes[510..512].copy_from_slice(&hex!("55 AA"));
        let mut fat = vec![0u16; SECTORS_PER_FAT * SECTOR_SIZE * 8 / 12];
        fat[0] = 0xFF0;
        fat[1] = 0xFFF;
        Self { bytes, fat }
    }

    pub fn set_boot_byte(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }

    pub fn set_fat(&mut self, cluster: u16, value: u16) {
        self.fat[cluster as usize] = value;
    }

    /// Link clusters in order, terminating with end of chain
    pub fn link(&mut self, clusters: &[u16]) {
        for pair in clusters.windows(2) {
            self.set_fat(pair[0], pair[1]);
        }
        if let Some(&last) = clusters.last() {
            self.set_fat(last, 0xFFF);
        }
    }

    fn cluster_offset(cluster: u16) -> usize {
        (FIRST_DATA_SECTOR + cluster as usize - 2) * SECTOR_SIZE
    }

    pub fn write_cluster(&mut self, cluster: u16, data: &[u8]) {
        let offset = Self::cluster_offset(cluster);
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }

    pub fn root_entry(&mut self, index: usize, raw: RawEntry) {
        let offset = ROOT_SECTOR * SECTOR_SIZE + index * ENTRY_SIZE;
        self.bytes[offset..offset + ENTRY_SIZE].copy_from_slice(&raw);
    }

    pub fn set_root_byte(&mut self, index: usize, offset: usize, value: u8) {
        self.bytes[ROOT_SECTOR * SECTOR_SIZE + index * ENTRY_SIZE + offset] = value;
    }

    pub fn cluster_entry(&mut self, cluster: u16, index: usize, raw: RawEntry) {
        let offset = Self::cluster_offset(cluster) + index * ENTRY_SIZE;
        self.bytes[offset..offset + ENTRY_SIZE].copy_from_slice(&raw);
    }

    /// Pack FAT into every copy
    pub fn finish(mut self) -> Memory<Vec<u8>> {
        let packed: Vec<u8> = self.fat.chunks(2).flat_map(|pair| pack(pair[0], pair[1])).collect();
        for index in 0..NUMBER_OF_FATS {
            let offset = (RESERVED_SECTORS + index * SECTORS_PER_FAT) * SECTOR_SIZE;
            self.bytes[offset..offset + packed.len()].copy_from_slice(&packed);
        }
        Memory::new(self.bytes)
    }
}

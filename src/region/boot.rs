use core::mem;

use crate::endian::Little as LE;

pub const BOOT_SECTOR_SIZE: usize = 512;

#[derive(Copy, Clone, Debug)]
#[repr(C, packed(1))]
pub struct BootSector {
    jump_boot: [u8; 3],
    oem_name: [u8; 8],
    // BPB 2.0
    bytes_per_sector: LE<u16>,
    sectors_per_cluster: u8,
    reserved_sectors: LE<u16>,
    number_of_fats: u8,
    root_entries: LE<u16>,
    total_sectors: LE<u16>,
    media_descriptor: u8,
    sectors_per_fat: LE<u16>,
    // BPB 3.31
    sectors_per_track: LE<u16>,
    heads: LE<u16>,
    hidden_sectors: LE<u32>,
    total_sectors_extended: LE<u32>,
    // Extended BPB
    drive_number: u8,
    _reserved: u8,
    extended_signature: u8,
    volume_id: [u8; 4],
    volume_label: [u8; 11],
    filesystem_type: [u8; 8],
    _bootcode: [u8; 448],
    boot_signature: [u8; 2],
}

impl From<[u8; BOOT_SECTOR_SIZE]> for BootSector {
    fn from(bytes: [u8; BOOT_SECTOR_SIZE]) -> Self {
        unsafe { mem::transmute(bytes) }
    }
}

impl BootSector {
    pub fn jump_boot(&self) -> [u8; 3] {
        self.jump_boot
    }

    pub fn oem_name(&self) -> [u8; 8] {
        self.oem_name
    }

    pub fn bytes_per_sector(&self) -> u16 {
        self.bytes_per_sector.to_ne()
    }

    pub fn sectors_per_cluster(&self) -> u8 {
        self.sectors_per_cluster
    }

    pub fn reserved_sectors(&self) -> u16 {
        self.reserved_sectors.to_ne()
    }

    pub fn number_of_fats(&self) -> u8 {
        self.number_of_fats
    }

    pub fn root_entries(&self) -> u16 {
        self.root_entries.to_ne()
    }

    /// Zero when volume is too large, see `total_sectors_extended`
    pub fn total_sectors(&self) -> u16 {
        self.total_sectors.to_ne()
    }

    pub fn media_descriptor(&self) -> u8 {
        self.media_descriptor
    }

    pub fn sectors_per_fat(&self) -> u16 {
        self.sectors_per_fat.to_ne()
    }

    pub fn sectors_per_track(&self) -> u16 {
        self.sectors_per_track.to_ne()
    }

    pub fn heads(&self) -> u16 {
        self.heads.to_ne()
    }

    pub fn hidden_sectors(&self) -> u32 {
        self.hidden_sectors.to_ne()
    }

    pub fn total_sectors_extended(&self) -> u32 {
        self.total_sectors_extended.to_ne()
    }

    pub fn drive_number(&self) -> u8 {
        self.drive_number
    }

    /// 0x29 when volume id, label and filesystem type are present
    pub fn extended_signature(&self) -> u8 {
        self.extended_signature
    }

    pub fn volume_id(&self) -> u32 {
        u32::from_le_bytes(self.volume_id)
    }

    pub fn volume_label(&self) -> [u8; 11] {
        self.volume_label
    }

    pub fn filesystem_type(&self) -> [u8; 8] {
        self.filesystem_type
    }

    pub fn has_boot_signature(&self) -> bool {
        self.boot_signature == hex!("55 AA")
    }

    pub fn has_extended_bpb(&self) -> bool {
        matches!(self.extended_signature, 0x28 | 0x29)
    }

    pub fn total_sector_count(&self) -> u32 {
        match self.total_sectors() {
            0 => self.total_sectors_extended(),
            count => count as u32,
        }
    }
}

use core::mem;

use bitfield::bitfield;
use derive_more::{From, Into};

use crate::endian::Little as LE;

pub(crate) const ENTRY_SIZE: usize = 32;
pub(crate) type RawEntry = [u8; ENTRY_SIZE];

/// First name byte of the record following the last one in use
pub(crate) const END_OF_DIRECTORY: u8 = 0x00;
/// First name byte of a deleted record
pub(crate) const DELETED: u8 = 0xE5;
/// First name byte standing for a real 0xE5 leading character
pub(crate) const KANJI_E5: u8 = 0x05;

bitfield! {
    #[derive(Copy, Clone, Default, From, Into, PartialEq, Eq)]
    pub struct Attributes(u8);
    impl Debug;
    pub read_only, _: 0;
    pub hidden, _: 1;
    pub system, _: 2;
    pub volume_label, _: 3;
    pub directory, _: 4;
    pub archive, _: 5;
    pub device, _: 6;
    pub reserved, _: 7;
}

impl Attributes {
    pub const DIRECTORY: u8 = 0x10;
    pub const VOLUME_LABEL: u8 = 0x08;
    /// Long filename record, read-only, hidden, system and volume label at once
    pub const LONG_NAME: u8 = 0x0F;

    const NAMES: [&'static str; 8] =
        ["read-only", "hidden", "system", "volume-label", "directory", "archive", "device", "reserved"];

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Names of bits set, lowest bit first
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let bits = self.0;
        let names = Self::NAMES.into_iter().enumerate();
        names.filter(move |(i, _)| bits & (1 << i) != 0).map(|(_, name)| name)
    }
}

bitfield! {
    /// Time of day with two seconds resolution
    #[derive(Copy, Clone, Default, From, Into, PartialEq, Eq)]
    pub struct Time(u16);
    impl Debug;
    pub hour, _: 15, 11;
    pub minute, _: 10, 5;
    double_second, _: 4, 0;
}

impl Time {
    pub fn second(&self) -> u16 {
        self.double_second() * 2
    }
}

bitfield! {
    #[derive(Copy, Clone, Default, From, Into, PartialEq, Eq)]
    pub struct Date(u16);
    impl Debug;
    year_offset, _: 15, 9;
    pub month, _: 8, 5;
    pub day, _: 4, 0;
}

impl Date {
    pub fn year(&self) -> u16 {
        self.year_offset() + 1980
    }
}

#[derive(Copy, Clone, Debug, Default)]
#[repr(C, packed(1))]
pub(crate) struct DirectoryEntry {
    pub name: [u8; 8],
    pub extension: [u8; 3],
    pub attributes: u8,
    _reserved1: u8,
    pub create_time_tenths: u8,
    pub create_time: LE<u16>,
    pub create_date: LE<u16>,
    pub last_access_date: LE<u16>,
    _reserved2: LE<u16>,
    pub last_modified_time: LE<u16>,
    pub last_modified_date: LE<u16>,
    pub first_cluster: LE<u16>,
    pub file_size: LE<u32>,
}

impl From<RawEntry> for DirectoryEntry {
    fn from(raw: RawEntry) -> Self {
        unsafe { mem::transmute(raw) }
    }
}

/// Decode every complete 32-byte record of buffer in order
pub(crate) fn records(bytes: &[u8]) -> impl Iterator<Item = DirectoryEntry> + '_ {
    bytes.chunks_exact(ENTRY_SIZE).map(|chunk| {
        let mut raw: RawEntry = [0u8; ENTRY_SIZE];
        raw.copy_from_slice(chunk);
        DirectoryEntry::from(raw)
    })
}

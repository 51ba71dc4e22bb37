#[cfg(feature = "chrono")]
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::name::{self, NameString, ShortName};
use crate::region::directory::{
    self, Attributes, DELETED, Date, DirectoryEntry, END_OF_DIRECTORY, RawEntry, Time,
};
use crate::types::ClusterID;

/// Date and time with 10 milliseconds resolution when `tenths` is set
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
    /// Units of 10 milliseconds, 0 to 199
    pub tenths: u8,
}

impl DateTime {
    pub fn millisecond(&self) -> u16 {
        self.tenths as u16 * 10 % 1000
    }

    /// Seconds including whole seconds carried by `tenths`
    pub fn second(&self) -> u16 {
        self.time.second() + self.tenths as u16 / 100
    }
}

#[cfg(feature = "chrono")]
impl Into<NaiveDateTime> for DateTime {
    fn into(self) -> NaiveDateTime {
        let (year, month, day) = (self.date.year(), self.date.month(), self.date.day());
        let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32);
        let (hour, minute, second) = (self.time.hour(), self.time.minute(), self.second());
        let millis = self.millisecond() as u32;
        let time = NaiveTime::from_hms_milli_opt(hour as u32, minute as u32, second as u32, millis);
        NaiveDateTime::new(date.unwrap_or_default(), time.unwrap_or_default())
    }
}

/// Decoded 32-byte directory record
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    name: [u8; name::NAME_SIZE],
    extension: [u8; name::EXTENSION_SIZE],
    attributes: Attributes,
    created: DateTime,
    last_accessed: Date,
    last_modified: DateTime,
    first_cluster: ClusterID,
    size: u32,
}

impl From<DirectoryEntry> for DirEntry {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            name: entry.name,
            extension: entry.extension,
            attributes: entry.attributes.into(),
            created: DateTime {
                date: entry.create_date.to_ne().into(),
                time: entry.create_time.to_ne().into(),
                tenths: entry.create_time_tenths,
            },
            last_accessed: entry.last_access_date.to_ne().into(),
            last_modified: DateTime {
                date: entry.last_modified_date.to_ne().into(),
                time: entry.last_modified_time.to_ne().into(),
                tenths: 0,
            },
            first_cluster: entry.first_cluster.to_ne().into(),
            size: entry.file_size.to_ne(),
        }
    }
}

impl From<RawEntry> for DirEntry {
    fn from(raw: RawEntry) -> Self {
        DirectoryEntry::from(raw).into()
    }
}

impl DirEntry {
    pub fn raw_name(&self) -> &[u8; name::NAME_SIZE] {
        &self.name
    }

    pub fn raw_extension(&self) -> &[u8; name::EXTENSION_SIZE] {
        &self.extension
    }

    /// `NAME.EXT` with padding removed
    pub fn name(&self) -> NameString {
        name::render(&self.name, &self.extension)
    }

    /// Name and extension read as one 11 byte label
    pub fn label(&self) -> NameString {
        let mut label = [0u8; name::NAME_SIZE + name::EXTENSION_SIZE];
        label[..name::NAME_SIZE].copy_from_slice(&self.name);
        label[name::NAME_SIZE..].copy_from_slice(&self.extension);
        name::render_label(&label)
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn is_directory(&self) -> bool {
        self.attributes.directory()
    }

    pub fn is_volume_label(&self) -> bool {
        self.attributes.volume_label() && !self.is_long_name()
    }

    /// Long filename fragment, never matched or opened
    pub fn is_long_name(&self) -> bool {
        self.attributes.bits() & 0x3F == Attributes::LONG_NAME
    }

    pub fn is_end_of_directory(&self) -> bool {
        self.name[0] == END_OF_DIRECTORY
    }

    pub fn is_deleted(&self) -> bool {
        self.name[0] == DELETED
    }

    /// `.` or `..` entry of a subdirectory
    pub fn is_dot(&self) -> bool {
        self.name[0] == b'.'
    }

    pub fn matches(&self, name: &ShortName) -> bool {
        name.matches(&self.name, &self.extension)
    }

    pub fn created(&self) -> DateTime {
        self.created
    }

    pub fn last_accessed(&self) -> Date {
        self.last_accessed
    }

    pub fn last_modified(&self) -> DateTime {
        self.last_modified
    }

    pub fn first_cluster(&self) -> ClusterID {
        self.first_cluster
    }

    /// Authoritative for files, zero for directories
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Decode every complete record of buffer positionally,
/// including deleted records and those after end of directory
pub fn decode_entries(bytes: &[u8]) -> impl Iterator<Item = DirEntry> + '_ {
    directory::records(bytes).map(DirEntry::from)
}

#[cfg(test)]
mod test {
    use super::{DirEntry, decode_entries};
    use crate::name::ShortName;
    use crate::region::directory::Attributes;

    const README: [u8; 32] =
        hex!("52 45 41 44 4D 45 20 20 54 58 54 21 00 64 A5 7B 4C 59 4C 59 00 00 A5 7B 4C 59 03 00 58 02 00 00");

    #[test]
    fn test_decode() {
        let entry = DirEntry::from(README);
        assert_eq!(entry.name().as_str(), "README.TXT");
        assert!(entry.matches(&ShortName::new("README.TXT").unwrap()));
        assert!(entry.matches(&ShortName::new("README").unwrap()));
        assert!(!entry.is_directory() && !entry.is_volume_label());
        assert!(entry.attributes().read_only() && entry.attributes().archive());
        assert_eq!(u16::from(entry.first_cluster()), 3);
        assert_eq!(entry.size(), 600);
        let created = entry.created();
        assert_eq!((created.time.hour(), created.time.minute(), created.second()), (15, 29, 11));
        assert_eq!(created.millisecond(), 0);
        let modified = entry.last_modified();
        assert_eq!((modified.date.year(), modified.date.month(), modified.date.day()), (2024, 10, 12));
        assert_eq!(entry.last_accessed().year(), 2024);
    }

    #[test]
    fn test_status() {
        let mut bytes = [0u8; 96];
        bytes[..32].copy_from_slice(&README);
        bytes[32..64].copy_from_slice(&README);
        bytes[32] = 0xE5;
        let entries: Vec<DirEntry> = decode_entries(&bytes[..95]).collect();
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].is_deleted() && !entries[0].is_end_of_directory());
        assert!(entries[1].is_deleted());
        let entries: Vec<DirEntry> = decode_entries(&bytes).collect();
        assert!(entries[2].is_end_of_directory());
    }

    #[test]
    fn test_volume_label() {
        let mut raw = [0u8; 32];
        raw[..11].copy_from_slice(b"MY  DISK   ");
        raw[11] = Attributes::VOLUME_LABEL;
        let entry = DirEntry::from(raw);
        assert!(entry.is_volume_label() && !entry.is_long_name());
        assert_eq!(entry.label().as_str(), "MY  DISK");
        raw[11] = Attributes::LONG_NAME;
        let entry = DirEntry::from(raw);
        assert!(entry.is_long_name() && !entry.is_volume_label());
    }

    #[test]
    fn test_dot_entries() {
        let mut raw = [b' '; 32];
        raw[..2].copy_from_slice(b"..");
        raw[11] = Attributes::DIRECTORY;
        let entry = DirEntry::from(raw);
        assert!(entry.is_dot() && entry.is_directory());
        assert_eq!(entry.name().as_str(), "..");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono() {
        use chrono::NaiveDateTime;

        use super::DateTime;

        let datetime = DateTime { date: 0x594C.into(), time: 0x7BA5.into(), tenths: 155 };
        let datetime: NaiveDateTime = datetime.into();
        assert_eq!(datetime.to_string(), "2024-10-12 15:29:11.550");
    }
}

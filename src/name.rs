use core::fmt;
use core::str::FromStr;

use crate::error::InputError;
use crate::region::directory::KANJI_E5;

pub const NAME_SIZE: usize = 8;
pub const EXTENSION_SIZE: usize = 3;

/// Rendered short name or volume label, bytes above 0x7F take two UTF-8 bytes
pub type NameString = heapless::String<24>;

fn trimmed(bytes: &[u8]) -> &[u8] {
    let length = bytes.iter().rposition(|&byte| byte != b' ').map_or(0, |index| index + 1);
    &bytes[..length]
}

fn push_bytes(string: &mut NameString, bytes: &[u8]) {
    for &byte in bytes {
        string.push(char::from(byte)).ok();
    }
}

/// `NAME.EXT` form of an on-disk 8.3 name
pub(crate) fn render(name: &[u8; NAME_SIZE], extension: &[u8; EXTENSION_SIZE]) -> NameString {
    let mut string = NameString::new();
    let mut name = *name;
    if name[0] == KANJI_E5 {
        name[0] = 0xE5;
    }
    push_bytes(&mut string, trimmed(&name));
    let extension = trimmed(extension);
    if !extension.is_empty() {
        string.push('.').ok();
        push_bytes(&mut string, extension);
    }
    string
}

/// Volume labels span name and extension without separator
pub(crate) fn render_label(label: &[u8]) -> NameString {
    let mut string = NameString::new();
    push_bytes(&mut string, trimmed(label));
    string
}

fn valid(byte: u8) -> bool {
    match byte {
        0x80.. => true,
        _ => byte > b' ' && byte < 0x7F && !b"\"*+,./:;<=>?[\\]|".contains(&byte),
    }
}

/// Latin-1 encode and space pad, the inverse of `render`
fn encode<const N: usize>(part: &str) -> Result<[u8; N], InputError> {
    let mut array = [b' '; N];
    for (index, c) in part.chars().enumerate() {
        let byte = u8::try_from(c).map_err(|_| InputError::InvalidName)?;
        if !valid(byte) {
            return Err(InputError::InvalidName);
        }
        *array.get_mut(index).ok_or(InputError::NameTooLong)? = byte;
    }
    Ok(array)
}

fn padded<const N: usize>(bytes: &[u8]) -> Result<[u8; N], InputError> {
    if bytes.len() > N {
        return Err(InputError::NameTooLong);
    }
    let mut array = [b' '; N];
    array[..bytes.len()].copy_from_slice(bytes);
    Ok(array)
}

/// Lookup key for 8.3 directory entries
///
/// Comparison is byte exact against the space padded on-disk fields,
/// no case folding takes place. Without an extension only the name
/// part is compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortName {
    name: [u8; NAME_SIZE],
    extension: Option<[u8; EXTENSION_SIZE]>,
}

impl ShortName {
    pub fn new(name: &str) -> Result<Self, InputError> {
        if name == "." || name == ".." {
            let extension = Some([b' '; EXTENSION_SIZE]);
            return Ok(Self { name: padded(name.as_bytes())?, extension });
        }
        let (stem, extension) = match name.split_once('.') {
            Some((stem, extension)) => (stem, Some(extension)),
            None => (name, None),
        };
        if stem.is_empty() {
            return Err(InputError::InvalidName);
        }
        let mut name = encode::<NAME_SIZE>(stem)?;
        if name[0] == 0xE5 {
            name[0] = KANJI_E5;
        }
        let extension = extension.map(encode::<EXTENSION_SIZE>).transpose()?;
        Ok(Self { name, extension })
    }

    pub fn name(&self) -> &[u8; NAME_SIZE] {
        &self.name
    }

    pub fn extension(&self) -> Option<&[u8; EXTENSION_SIZE]> {
        self.extension.as_ref()
    }

    pub fn matches(&self, name: &[u8; NAME_SIZE], extension: &[u8; EXTENSION_SIZE]) -> bool {
        if &self.name != name {
            return false;
        }
        self.extension.as_ref().map(|ext| ext == extension).unwrap_or(true)
    }
}

impl FromStr for ShortName {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extension = self.extension.unwrap_or([b' '; EXTENSION_SIZE]);
        f.write_str(&render(&self.name, &extension))
    }
}

#[cfg(test)]
mod test {
    use super::{ShortName, render, render_label};
    use crate::error::InputError;

    #[test]
    fn test_parse() {
        let name = ShortName::new("README.TXT").unwrap();
        assert_eq!(name.name(), b"README  ");
        assert_eq!(name.extension(), Some(b"TXT"));
        let name: ShortName = "SUBDIR".parse().unwrap();
        assert_eq!(name.name(), b"SUBDIR  ");
        assert_eq!(name.extension(), None);
        let name = ShortName::new("..").unwrap();
        assert_eq!(name.name(), b"..      ");
        assert_eq!(name.extension(), Some(b"   "));
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(ShortName::new("TOOLONGNAME"), Err(InputError::NameTooLong));
        assert_eq!(ShortName::new("FILE.TEXT"), Err(InputError::NameTooLong));
        assert_eq!(ShortName::new(""), Err(InputError::InvalidName));
        assert_eq!(ShortName::new(".TXT"), Err(InputError::InvalidName));
        assert_eq!(ShortName::new("A.B.C"), Err(InputError::InvalidName));
        assert_eq!(ShortName::new("MY FILE"), Err(InputError::InvalidName));
        assert_eq!(ShortName::new("A*"), Err(InputError::InvalidName));
        assert_eq!(ShortName::new("A\u{7F}"), Err(InputError::InvalidName));
        assert_eq!(ShortName::new("\u{65E5}"), Err(InputError::InvalidName));
    }

    #[test]
    fn test_matches() {
        let name = ShortName::new("README.TXT").unwrap();
        assert!(name.matches(b"README  ", b"TXT"));
        assert!(!name.matches(b"README  ", b"MD "));
        assert!(!name.matches(b"readme  ", b"txt"));
        let name = ShortName::new("README").unwrap();
        assert!(name.matches(b"README  ", b"TXT"));
        assert!(name.matches(b"README  ", b"   "));
        assert!(!name.matches(b"READMEX ", b"   "));
        let name = ShortName::new("README.").unwrap();
        assert!(!name.matches(b"README  ", b"TXT"));
        assert!(name.matches(b"README  ", b"   "));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(b"README  ", b"TXT").as_str(), "README.TXT");
        assert_eq!(render(b"SUBDIR  ", b"   ").as_str(), "SUBDIR");
        assert_eq!(render(b"\x05BC     ", b"   ").as_str(), "\u{E5}BC");
        assert_eq!(render_label(b"MY DISK    ").as_str(), "MY DISK");
        assert_eq!(ShortName::new("A.B").unwrap().to_string(), "A.B");
    }

    #[test]
    fn test_parse_rendered() {
        let name = ShortName::new("\u{E5}BC").unwrap();
        assert_eq!(name.name(), b"\x05BC     ");
        assert!(name.matches(b"\x05BC     ", b"   "));

        let rendered = render(b"CAF\xC9    ", b"TXT");
        assert_eq!(rendered.as_str(), "CAF\u{C9}.TXT");
        let name = ShortName::new(&rendered).unwrap();
        assert!(name.matches(b"CAF\xC9    ", b"TXT"));
        assert_eq!(name.to_string(), "CAF\u{C9}.TXT");
    }
}

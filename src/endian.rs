use core::fmt::Debug;

/// On-disk little endian value, only converted on access
#[derive(Copy, Clone, Default, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Little<T: Copy + Clone + Default + Debug + PartialEq + PartialOrd + Sized>(T);

macro_rules! define {
    ($type:ty) => {
        impl Little<$type> {
            #[inline]
            pub fn to_ne(self) -> $type {
                <$type>::from_le(self.0)
            }
        }

        impl From<$type> for Little<$type> {
            #[inline]
            fn from(t: $type) -> Self {
                Self(<$type>::to_le(t))
            }
        }
    };
}

define!(u16);
define!(u32);

#[cfg(test)]
mod test {
    use super::Little;

    #[test]
    fn test_little_endian_layout() {
        let value: Little<u16> = 0x1234u16.into();
        let bytes: [u8; 2] = unsafe { core::mem::transmute(value) };
        assert_eq!(bytes, [0x34, 0x12]);
        let value: Little<u32> = unsafe { core::mem::transmute([0x78u8, 0x56, 0x34, 0x12]) };
        assert_eq!(value.to_ne(), 0x12345678);
    }
}

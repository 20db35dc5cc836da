use crate::bitstream::error::BitstreamError;
use crate::bitstream::result::Result;

pub fn xor_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(BitstreamError::LengthMismatchError(a.len(), b.len()));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

#[cfg(test)]
mod tests {
    use super::xor_bytes;
    use crate::bitstream::error::BitstreamError;

    #[test]
    fn test_xor_bytes() {
        let a = vec![0x00, 0x0f, 0xff, 0x81];
        let b = vec![0x00, 0xf0, 0x0f, 0x01];
        assert_eq!(xor_bytes(&a, &b).unwrap(), vec![0x00, 0xff, 0xf0, 0x80]);
    }

    #[test]
    fn test_xor_bytes_symmetric() {
        let a: Vec<u8> = (0..=255).collect();
        let b: Vec<u8> = (0..=255).rev().collect();
        assert_eq!(xor_bytes(&a, &b).unwrap(), xor_bytes(&b, &a).unwrap());
    }

    #[test]
    fn test_xor_bytes_self_is_zero() {
        let a: Vec<u8> = (0..64).map(|v| v * 3).collect();
        assert!(xor_bytes(&a, &a).unwrap().iter().all(|v| *v == 0));
    }

    #[test]
    fn test_xor_bytes_empty() {
        assert_eq!(xor_bytes(&[], &[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_xor_bytes_length_mismatch() {
        match xor_bytes(&[0, 1, 2], &[0, 1]) {
            Err(BitstreamError::LengthMismatchError(3, 2)) => (),
            other => assert!(false, "{:?}", other),
        }
    }
}

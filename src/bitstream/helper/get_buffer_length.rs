use std::io::{Seek, SeekFrom};

pub fn get_buffer_length<R: Seek>(reader: &mut R) -> std::io::Result<usize> {
    let size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(size as usize)
}

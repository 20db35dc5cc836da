mod get_buffer_length;
mod xor_bytes;

pub(crate) use get_buffer_length::get_buffer_length;
pub(crate) use xor_bytes::xor_bytes;

#![allow(ambiguous_glob_reexports)]

pub mod create_group;
pub mod distribute_packet;
pub mod get_packet_giver;
pub mod get_packet_recipient;
pub mod get_packet_recipient_indexes;
pub mod get_packet_summary;

pub use create_group::*;
pub use distribute_packet::*;
pub use get_packet_giver::*;
pub use get_packet_recipient::*;
pub use get_packet_recipient_indexes::*;
pub use get_packet_summary::*;

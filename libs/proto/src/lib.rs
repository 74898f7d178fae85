//! # tracekit-proto
//!
//! Wire message types shared between the tracekit agent core and the
//! transport layer.
//!
//! The definitions mirror the schemas under `api/proto/` and are maintained
//! by hand with `prost` derives; the workspace deliberately carries no
//! `protoc` build step.

pub mod common {
    pub mod v1 {
        /// Globally unique identifier carried on the wire as an ordered
        /// sequence of 64-bit parts.
        ///
        /// Field order matches the in-memory identifier layout: application
        /// instance, thread, timestamp-sequence composite.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct UniqueId {
            #[prost(int64, repeated, packed = "true", tag = "1")]
            pub id_parts: Vec<i64>,
        }
    }
}

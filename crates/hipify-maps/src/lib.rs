//! Rename tables mapping CUDA vocabulary to HIP.
//!
//! Three independent read-only maps keyed by CUDA spelling: identifiers
//! (functions, enumerators, defines, builtin members), type names, and
//! angle-include paths. They are independent maps rather than one union
//! because name spaces collide: `cudaStream_t` the identifier and
//! `cudaStream_t` the type are looked up at different match sites.
//!
//! A fourth view, [`renames`], merges identifiers and type names; it backs
//! the token rewriter and the string-literal rewriter, where a bare token
//! may be either. All maps are built once on first use and never mutated.

#![warn(missing_docs)]

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::sync::LazyLock;

mod data;

/// The conversion taxonomy a rename belongs to. Drives statistics grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConvType {
    /// Version queries.
    Version,
    /// Initialization.
    Init,
    /// Device management.
    Device,
    /// Memory management.
    Mem,
    /// Kernel launch.
    Kern,
    /// Coordinate builtins (`threadIdx.x`, ...).
    CoordFunc,
    /// Math functions.
    MathFunc,
    /// Special device functions.
    SpecialFunc,
    /// Stream management.
    Stream,
    /// Event management.
    Event,
    /// Occupancy queries.
    Occupancy,
    /// Driver-API contexts.
    Context,
    /// Peer access.
    Peer,
    /// Driver-API modules.
    Module,
    /// Cache configuration.
    Cache,
    /// Execution control.
    Exec,
    /// Error handling and error codes.
    Error,
    /// Preprocessor defines.
    Def,
    /// Texture APIs.
    Tex,
    /// Legacy thread APIs.
    Thread,
    /// Everything else.
    Other,
    /// Header includes.
    Include,
    /// The main runtime header include.
    IncludeCudaMainH,
    /// Type names.
    Type,
    /// In-string-literal references.
    Literal,
    /// Enumerator values.
    NumericLiteral,
}

impl ConvType {
    /// Stable lower-case label used in statistics output and CSV rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Init => "init",
            Self::Device => "device",
            Self::Mem => "memory",
            Self::Kern => "kernel_launch",
            Self::CoordFunc => "coordinate_functions",
            Self::MathFunc => "math_functions",
            Self::SpecialFunc => "special_functions",
            Self::Stream => "stream",
            Self::Event => "event",
            Self::Occupancy => "occupancy",
            Self::Context => "context",
            Self::Peer => "peer",
            Self::Module => "module",
            Self::Cache => "cache",
            Self::Exec => "execution",
            Self::Error => "error",
            Self::Def => "define",
            Self::Tex => "texture",
            Self::Thread => "thread",
            Self::Other => "other",
            Self::Include => "include",
            Self::IncludeCudaMainH => "include_cuda_main_header",
            Self::Type => "type",
            Self::Literal => "literal",
            Self::NumericLiteral => "numeric_literal",
        }
    }
}

/// Which API family a rename belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ApiType {
    /// The CUDA driver API (`cu*`).
    Driver,
    /// The CUDA runtime API (`cuda*`).
    Runtime,
    /// cuBLAS.
    Blas,
}

impl ApiType {
    /// Stable label used in statistics output and CSV rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Driver => "CUDA Driver API",
            Self::Runtime => "CUDA RT API",
            Self::Blas => "CUBLAS API",
        }
    }
}

/// One rename-table entry: the HIP replacement plus classification tags.
///
/// Entries flagged `unsupported` exist to produce diagnostics and counts;
/// they never produce an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenameEntry {
    /// The HIP spelling.
    pub hip_name: &'static str,
    /// Conversion taxonomy tag.
    pub conv: ConvType,
    /// API family tag.
    pub api: ApiType,
    /// True when HIP has no counterpart; lookups then warn instead of edit.
    pub unsupported: bool,
}

/// A rename map keyed by CUDA spelling.
pub type RenameMap = FxHashMap<&'static str, RenameEntry>;

static IDENTIFIERS: LazyLock<RenameMap> =
    LazyLock::new(|| data::IDENTIFIER_RENAMES.iter().copied().collect());

static TYPE_NAMES: LazyLock<RenameMap> =
    LazyLock::new(|| data::TYPE_RENAMES.iter().copied().collect());

static INCLUDES: LazyLock<RenameMap> =
    LazyLock::new(|| data::INCLUDE_RENAMES.iter().copied().collect());

static RENAMES: LazyLock<RenameMap> = LazyLock::new(|| {
    // Identifier entries first, type entries second; on the few shared
    // spellings the type entry wins, matching the original merged map.
    data::IDENTIFIER_RENAMES
        .iter()
        .chain(data::TYPE_RENAMES.iter())
        .copied()
        .collect()
});

static BUILTIN_OBJECTS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    data::IDENTIFIER_RENAMES
        .iter()
        .filter_map(|(name, _)| name.split_once('.').map(|(obj, _)| obj))
        .collect()
});

/// Identifier renames: functions, enumerators, defines, builtin members.
#[must_use]
pub fn identifiers() -> &'static RenameMap {
    &IDENTIFIERS
}

/// Type-name renames.
#[must_use]
pub fn type_names() -> &'static RenameMap {
    &TYPE_NAMES
}

/// Angle-include path renames.
#[must_use]
pub fn includes() -> &'static RenameMap {
    &INCLUDES
}

/// The merged identifier + type map used for bare-token and in-string
/// lookups.
#[must_use]
pub fn renames() -> &'static RenameMap {
    &RENAMES
}

/// Object names of the member-style coordinate builtins (`threadIdx`,
/// `blockIdx`, `blockDim`, `gridDim`), derived from the dotted identifier
/// keys.
#[must_use]
pub fn builtin_objects() -> &'static FxHashSet<&'static str> {
    &BUILTIN_OBJECTS
}

/// The CUDA identifier prefix that anchors recognition.
pub const CUDA_PREFIX: &str = "cu";

/// The HIP runtime header inserted into every translated file.
pub const HIP_MAIN_HEADER: &str = "hip/hip_runtime.h";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_lookup() {
        let entry = identifiers().get("cudaMalloc").unwrap();
        assert_eq!(entry.hip_name, "hipMalloc");
        assert_eq!(entry.conv, ConvType::Mem);
        assert_eq!(entry.api, ApiType::Runtime);
        assert!(!entry.unsupported);
    }

    #[test]
    fn test_type_lookup() {
        let entry = type_names().get("cudaError_t").unwrap();
        assert_eq!(entry.hip_name, "hipError_t");
        assert_eq!(entry.conv, ConvType::Type);

        // Driver-API types fold onto the same HIP types.
        let entry = type_names().get("CUstream").unwrap();
        assert_eq!(entry.hip_name, "hipStream_t");
        assert_eq!(entry.api, ApiType::Driver);
    }

    #[test]
    fn test_include_lookup() {
        let entry = includes().get("cuda_runtime.h").unwrap();
        assert_eq!(entry.hip_name, "hip/hip_runtime.h");
        assert_eq!(entry.conv, ConvType::IncludeCudaMainH);
    }

    #[test]
    fn test_merged_map_reaches_types() {
        // The token rewriter sees `cudaError_t` as a bare identifier inside
        // macro bodies; the merged map must resolve it.
        let entry = renames().get("cudaError_t").unwrap();
        assert_eq!(entry.hip_name, "hipError_t");
        assert!(renames().contains_key("cudaMalloc"));
    }

    #[test]
    fn test_builtin_members() {
        let entry = identifiers().get("threadIdx.x").unwrap();
        assert_eq!(entry.hip_name, "hipThreadIdx_x");
        assert_eq!(entry.conv, ConvType::CoordFunc);

        let objects = builtin_objects();
        for obj in ["threadIdx", "blockIdx", "blockDim", "gridDim"] {
            assert!(objects.contains(obj), "missing builtin object {obj}");
        }
    }

    #[test]
    fn test_unsupported_entries_present() {
        let entry = identifiers().get("cudaMallocManaged").unwrap();
        assert!(entry.unsupported);

        let entry = includes().get("cuda_gl_interop.h").unwrap();
        assert!(entry.unsupported);
    }

    #[test]
    fn test_hip_names_never_relex_as_cuda() {
        // Idempotence on output form: no HIP replacement may itself be a
        // CUDA key, or retranslation would keep editing.
        for map in [identifiers(), type_names(), includes()] {
            for (name, entry) in map {
                assert!(
                    !renames().contains_key(entry.hip_name) && !includes().contains_key(entry.hip_name),
                    "replacement for {name} is itself a CUDA key"
                );
            }
        }
    }
}

//! The rename-table data.
//!
//! One `(cuda_name, entry)` row per rename, grouped the way the CUDA
//! documentation groups the APIs. Entries marked with `unsup` have no HIP
//! counterpart: they are kept so uses are diagnosed and counted rather than
//! silently skipped.

use crate::{ApiType, ConvType, RenameEntry};

const fn ok(hip_name: &'static str, conv: ConvType, api: ApiType) -> RenameEntry {
    RenameEntry {
        hip_name,
        conv,
        api,
        unsupported: false,
    }
}

const fn unsup(hip_name: &'static str, conv: ConvType, api: ApiType) -> RenameEntry {
    RenameEntry {
        hip_name,
        conv,
        api,
        unsupported: true,
    }
}

use ApiType::{Blas, Driver, Runtime};
use ConvType as C;

/// Angle-include path renames.
pub(crate) static INCLUDE_RENAMES: &[(&str, RenameEntry)] = &[
    ("cuda.h", ok("hip/hip_runtime.h", C::IncludeCudaMainH, Driver)),
    ("cuda_runtime.h", ok("hip/hip_runtime.h", C::IncludeCudaMainH, Runtime)),
    ("cuda_runtime_api.h", ok("hip/hip_runtime_api.h", C::Include, Runtime)),
    ("channel_descriptor.h", ok("hip/channel_descriptor.h", C::Include, Runtime)),
    ("device_functions.h", ok("hip/device_functions.h", C::Include, Runtime)),
    ("driver_types.h", ok("hip/driver_types.h", C::Include, Runtime)),
    ("vector_types.h", ok("hip/hip_vector_types.h", C::Include, Runtime)),
    ("cuComplex.h", ok("hip/hip_complex.h", C::Include, Runtime)),
    ("cuda_fp16.h", ok("hip/hip_fp16.h", C::Include, Runtime)),
    ("cuda_texture_types.h", ok("hip/hip_texture_types.h", C::Include, Runtime)),
    ("texture_fetch_functions.h", unsup("", C::Include, Runtime)),
    ("cublas.h", ok("hipblas.h", C::Include, Blas)),
    ("cublas_v2.h", ok("hipblas.h", C::Include, Blas)),
    ("curand.h", ok("hiprand.h", C::Include, Runtime)),
    ("curand_kernel.h", ok("hiprand_kernel.h", C::Include, Runtime)),
    ("cuda_gl_interop.h", unsup("", C::Include, Runtime)),
    ("cuda_profiler_api.h", unsup("", C::Include, Runtime)),
    ("cooperative_groups.h", unsup("", C::Include, Runtime)),
];

/// Type-name renames.
pub(crate) static TYPE_RENAMES: &[(&str, RenameEntry)] = &[
    // Runtime API types.
    ("cudaError_t", ok("hipError_t", C::Type, Runtime)),
    ("cudaError", ok("hipError_t", C::Type, Runtime)),
    ("cudaEvent_t", ok("hipEvent_t", C::Type, Runtime)),
    ("cudaStream_t", ok("hipStream_t", C::Type, Runtime)),
    ("cudaDeviceProp", ok("hipDeviceProp_t", C::Type, Runtime)),
    ("cudaMemcpyKind", ok("hipMemcpyKind", C::Type, Runtime)),
    ("cudaDeviceAttr", ok("hipDeviceAttribute_t", C::Type, Runtime)),
    ("cudaFuncCache", ok("hipFuncCache", C::Type, Runtime)),
    ("cudaSharedMemConfig", ok("hipSharedMemConfig", C::Type, Runtime)),
    ("cudaLimit", ok("hipLimit_t", C::Type, Runtime)),
    ("cudaChannelFormatDesc", ok("hipChannelFormatDesc", C::Type, Runtime)),
    ("cudaChannelFormatKind", ok("hipChannelFormatKind", C::Type, Runtime)),
    ("cudaArray", ok("hipArray", C::Type, Runtime)),
    ("cudaArray_t", ok("hipArray_t", C::Type, Runtime)),
    ("cudaIpcEventHandle_t", ok("hipIpcEventHandle_t", C::Type, Runtime)),
    ("cudaIpcMemHandle_t", ok("hipIpcMemHandle_t", C::Type, Runtime)),
    ("cudaPointerAttributes", ok("hipPointerAttribute_t", C::Type, Runtime)),
    ("cudaTextureObject_t", unsup("", C::Type, Runtime)),
    ("cudaSurfaceObject_t", unsup("", C::Type, Runtime)),
    ("cudaGraphicsResource", unsup("", C::Type, Runtime)),
    // Driver API types fold onto the same HIP types.
    ("CUresult", ok("hipError_t", C::Type, Driver)),
    ("CUdevice", ok("hipDevice_t", C::Type, Driver)),
    ("CUdeviceptr", ok("hipDeviceptr_t", C::Type, Driver)),
    ("CUcontext", ok("hipCtx_t", C::Type, Driver)),
    ("CUmodule", ok("hipModule_t", C::Type, Driver)),
    ("CUfunction", ok("hipFunction_t", C::Type, Driver)),
    ("CUstream", ok("hipStream_t", C::Type, Driver)),
    ("CUevent", ok("hipEvent_t", C::Type, Driver)),
    ("CUjit_option", ok("hipJitOption", C::Type, Driver)),
    ("CUgraphicsResource", unsup("", C::Type, Driver)),
    ("CUtexref", unsup("", C::Type, Driver)),
    // cuBLAS types.
    ("cublasHandle_t", ok("hipblasHandle_t", C::Type, Blas)),
    ("cublasStatus_t", ok("hipblasStatus_t", C::Type, Blas)),
    ("cublasStatus", ok("hipblasStatus_t", C::Type, Blas)),
    ("cublasOperation_t", ok("hipblasOperation_t", C::Type, Blas)),
    ("cublasPointerMode_t", unsup("", C::Type, Blas)),
    // cuRAND types.
    ("curandState_t", ok("hiprandState_t", C::Type, Runtime)),
    ("curandState", ok("hiprandState_t", C::Type, Runtime)),
    ("curandGenerator_t", ok("hiprandGenerator_t", C::Type, Runtime)),
];

/// Identifier renames: functions, enumerators, defines, builtin members.
pub(crate) static IDENTIFIER_RENAMES: &[(&str, RenameEntry)] = &[
    // ------------------------------------------------------------------
    // Runtime API: device management
    // ------------------------------------------------------------------
    ("cudaGetDevice", ok("hipGetDevice", C::Device, Runtime)),
    ("cudaSetDevice", ok("hipSetDevice", C::Device, Runtime)),
    ("cudaGetDeviceCount", ok("hipGetDeviceCount", C::Device, Runtime)),
    ("cudaGetDeviceProperties", ok("hipGetDeviceProperties", C::Device, Runtime)),
    ("cudaChooseDevice", ok("hipChooseDevice", C::Device, Runtime)),
    ("cudaDeviceReset", ok("hipDeviceReset", C::Device, Runtime)),
    ("cudaDeviceSynchronize", ok("hipDeviceSynchronize", C::Device, Runtime)),
    ("cudaDeviceGetAttribute", ok("hipDeviceGetAttribute", C::Device, Runtime)),
    ("cudaSetDeviceFlags", ok("hipSetDeviceFlags", C::Device, Runtime)),
    ("cudaGetDeviceFlags", unsup("", C::Device, Runtime)),
    ("cudaDeviceGetLimit", unsup("", C::Device, Runtime)),
    ("cudaDeviceSetLimit", unsup("", C::Device, Runtime)),
    ("cudaDeviceGetByPCIBusId", ok("hipDeviceGetByPCIBusId", C::Device, Runtime)),
    ("cudaDeviceGetPCIBusId", ok("hipDeviceGetPCIBusId", C::Device, Runtime)),
    // Legacy thread API.
    ("cudaThreadSynchronize", ok("hipDeviceSynchronize", C::Thread, Runtime)),
    ("cudaThreadExit", ok("hipDeviceReset", C::Thread, Runtime)),
    ("cudaThreadGetCacheConfig", ok("hipDeviceGetCacheConfig", C::Thread, Runtime)),
    ("cudaThreadSetCacheConfig", ok("hipDeviceSetCacheConfig", C::Thread, Runtime)),
    // Cache and shared-memory configuration.
    ("cudaDeviceGetCacheConfig", ok("hipDeviceGetCacheConfig", C::Cache, Runtime)),
    ("cudaDeviceSetCacheConfig", ok("hipDeviceSetCacheConfig", C::Cache, Runtime)),
    ("cudaFuncSetCacheConfig", ok("hipFuncSetCacheConfig", C::Cache, Runtime)),
    ("cudaDeviceGetSharedMemConfig", ok("hipDeviceGetSharedMemConfig", C::Cache, Runtime)),
    ("cudaDeviceSetSharedMemConfig", ok("hipDeviceSetSharedMemConfig", C::Cache, Runtime)),
    ("cudaFuncCachePreferNone", ok("hipFuncCachePreferNone", C::Cache, Runtime)),
    ("cudaFuncCachePreferShared", ok("hipFuncCachePreferShared", C::Cache, Runtime)),
    ("cudaFuncCachePreferL1", ok("hipFuncCachePreferL1", C::Cache, Runtime)),
    ("cudaFuncCachePreferEqual", ok("hipFuncCachePreferEqual", C::Cache, Runtime)),
    ("cudaSharedMemBankSizeDefault", ok("hipSharedMemBankSizeDefault", C::Cache, Runtime)),
    ("cudaSharedMemBankSizeFourByte", ok("hipSharedMemBankSizeFourByte", C::Cache, Runtime)),
    ("cudaSharedMemBankSizeEightByte", ok("hipSharedMemBankSizeEightByte", C::Cache, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: memory
    // ------------------------------------------------------------------
    ("cudaMalloc", ok("hipMalloc", C::Mem, Runtime)),
    ("cudaMallocHost", ok("hipHostMalloc", C::Mem, Runtime)),
    ("cudaHostAlloc", ok("hipHostMalloc", C::Mem, Runtime)),
    ("cudaMallocArray", ok("hipMallocArray", C::Mem, Runtime)),
    ("cudaMallocPitch", unsup("", C::Mem, Runtime)),
    ("cudaMalloc3D", unsup("", C::Mem, Runtime)),
    ("cudaMallocManaged", unsup("", C::Mem, Runtime)),
    ("cudaFree", ok("hipFree", C::Mem, Runtime)),
    ("cudaFreeHost", ok("hipHostFree", C::Mem, Runtime)),
    ("cudaFreeArray", ok("hipFreeArray", C::Mem, Runtime)),
    ("cudaMemcpy", ok("hipMemcpy", C::Mem, Runtime)),
    ("cudaMemcpyAsync", ok("hipMemcpyAsync", C::Mem, Runtime)),
    ("cudaMemcpy2D", ok("hipMemcpy2D", C::Mem, Runtime)),
    ("cudaMemcpy2DAsync", unsup("", C::Mem, Runtime)),
    ("cudaMemcpyToArray", ok("hipMemcpyToArray", C::Mem, Runtime)),
    ("cudaMemcpyToSymbol", ok("hipMemcpyToSymbol", C::Mem, Runtime)),
    ("cudaMemcpyFromSymbol", unsup("", C::Mem, Runtime)),
    ("cudaMemset", ok("hipMemset", C::Mem, Runtime)),
    ("cudaMemsetAsync", ok("hipMemsetAsync", C::Mem, Runtime)),
    ("cudaMemGetInfo", ok("hipMemGetInfo", C::Mem, Runtime)),
    ("cudaHostGetDevicePointer", ok("hipHostGetDevicePointer", C::Mem, Runtime)),
    ("cudaHostGetFlags", ok("hipHostGetFlags", C::Mem, Runtime)),
    ("cudaHostRegister", ok("hipHostRegister", C::Mem, Runtime)),
    ("cudaHostUnregister", ok("hipHostUnregister", C::Mem, Runtime)),
    ("cudaPointerGetAttributes", ok("hipPointerGetAttributes", C::Mem, Runtime)),
    // Memcpy kinds.
    ("cudaMemcpyHostToHost", ok("hipMemcpyHostToHost", C::Mem, Runtime)),
    ("cudaMemcpyHostToDevice", ok("hipMemcpyHostToDevice", C::Mem, Runtime)),
    ("cudaMemcpyDeviceToHost", ok("hipMemcpyDeviceToHost", C::Mem, Runtime)),
    ("cudaMemcpyDeviceToDevice", ok("hipMemcpyDeviceToDevice", C::Mem, Runtime)),
    ("cudaMemcpyDefault", ok("hipMemcpyDefault", C::Mem, Runtime)),
    // Host-allocation and registration flags.
    ("cudaHostAllocDefault", ok("hipHostMallocDefault", C::Mem, Runtime)),
    ("cudaHostAllocPortable", ok("hipHostMallocPortable", C::Mem, Runtime)),
    ("cudaHostAllocMapped", ok("hipHostMallocMapped", C::Mem, Runtime)),
    ("cudaHostAllocWriteCombined", ok("hipHostMallocWriteCombined", C::Mem, Runtime)),
    ("cudaHostRegisterDefault", ok("hipHostRegisterDefault", C::Mem, Runtime)),
    ("cudaHostRegisterPortable", ok("hipHostRegisterPortable", C::Mem, Runtime)),
    ("cudaHostRegisterMapped", ok("hipHostRegisterMapped", C::Mem, Runtime)),
    ("cudaHostRegisterIoMemory", unsup("", C::Mem, Runtime)),
    // IPC.
    ("cudaIpcGetEventHandle", ok("hipIpcGetEventHandle", C::Mem, Runtime)),
    ("cudaIpcOpenEventHandle", ok("hipIpcOpenEventHandle", C::Mem, Runtime)),
    ("cudaIpcGetMemHandle", ok("hipIpcGetMemHandle", C::Mem, Runtime)),
    ("cudaIpcOpenMemHandle", ok("hipIpcOpenMemHandle", C::Mem, Runtime)),
    ("cudaIpcCloseMemHandle", ok("hipIpcCloseMemHandle", C::Mem, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: error handling
    // ------------------------------------------------------------------
    ("cudaGetLastError", ok("hipGetLastError", C::Error, Runtime)),
    ("cudaPeekAtLastError", ok("hipPeekAtLastError", C::Error, Runtime)),
    ("cudaGetErrorName", ok("hipGetErrorName", C::Error, Runtime)),
    ("cudaGetErrorString", ok("hipGetErrorString", C::Error, Runtime)),
    ("cudaSuccess", ok("hipSuccess", C::NumericLiteral, Runtime)),
    ("cudaErrorMemoryAllocation", ok("hipErrorMemoryAllocation", C::NumericLiteral, Runtime)),
    ("cudaErrorInitializationError", ok("hipErrorInitializationError", C::NumericLiteral, Runtime)),
    ("cudaErrorInvalidValue", ok("hipErrorInvalidValue", C::NumericLiteral, Runtime)),
    ("cudaErrorInvalidDevice", ok("hipErrorInvalidDevice", C::NumericLiteral, Runtime)),
    ("cudaErrorInvalidDevicePointer", ok("hipErrorInvalidDevicePointer", C::NumericLiteral, Runtime)),
    ("cudaErrorInvalidMemcpyDirection", ok("hipErrorInvalidMemcpyDirection", C::NumericLiteral, Runtime)),
    ("cudaErrorInsufficientDriver", ok("hipErrorInsufficientDriver", C::NumericLiteral, Runtime)),
    ("cudaErrorNoDevice", ok("hipErrorNoDevice", C::NumericLiteral, Runtime)),
    ("cudaErrorNotReady", ok("hipErrorNotReady", C::NumericLiteral, Runtime)),
    ("cudaErrorLaunchFailure", ok("hipErrorLaunchFailure", C::NumericLiteral, Runtime)),
    ("cudaErrorLaunchOutOfResources", ok("hipErrorLaunchOutOfResources", C::NumericLiteral, Runtime)),
    ("cudaErrorLaunchTimeout", ok("hipErrorLaunchTimeOut", C::NumericLiteral, Runtime)),
    ("cudaErrorUnknown", ok("hipErrorUnknown", C::NumericLiteral, Runtime)),
    ("cudaErrorPeerAccessAlreadyEnabled", ok("hipErrorPeerAccessAlreadyEnabled", C::NumericLiteral, Runtime)),
    ("cudaErrorPeerAccessNotEnabled", ok("hipErrorPeerAccessNotEnabled", C::NumericLiteral, Runtime)),
    ("cudaErrorHostMemoryAlreadyRegistered", ok("hipErrorHostMemoryAlreadyRegistered", C::NumericLiteral, Runtime)),
    ("cudaErrorHostMemoryNotRegistered", ok("hipErrorHostMemoryNotRegistered", C::NumericLiteral, Runtime)),
    ("cudaErrorUnsupportedLimit", unsup("", C::NumericLiteral, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: streams
    // ------------------------------------------------------------------
    ("cudaStreamCreate", ok("hipStreamCreate", C::Stream, Runtime)),
    ("cudaStreamCreateWithFlags", ok("hipStreamCreateWithFlags", C::Stream, Runtime)),
    ("cudaStreamDestroy", ok("hipStreamDestroy", C::Stream, Runtime)),
    ("cudaStreamSynchronize", ok("hipStreamSynchronize", C::Stream, Runtime)),
    ("cudaStreamWaitEvent", ok("hipStreamWaitEvent", C::Stream, Runtime)),
    ("cudaStreamQuery", ok("hipStreamQuery", C::Stream, Runtime)),
    ("cudaStreamAddCallback", unsup("", C::Stream, Runtime)),
    ("cudaStreamAttachMemAsync", unsup("", C::Stream, Runtime)),
    ("cudaStreamDefault", ok("hipStreamDefault", C::Stream, Runtime)),
    ("cudaStreamNonBlocking", ok("hipStreamNonBlocking", C::Stream, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: events
    // ------------------------------------------------------------------
    ("cudaEventCreate", ok("hipEventCreate", C::Event, Runtime)),
    ("cudaEventCreateWithFlags", ok("hipEventCreateWithFlags", C::Event, Runtime)),
    ("cudaEventRecord", ok("hipEventRecord", C::Event, Runtime)),
    ("cudaEventDestroy", ok("hipEventDestroy", C::Event, Runtime)),
    ("cudaEventSynchronize", ok("hipEventSynchronize", C::Event, Runtime)),
    ("cudaEventElapsedTime", ok("hipEventElapsedTime", C::Event, Runtime)),
    ("cudaEventQuery", ok("hipEventQuery", C::Event, Runtime)),
    ("cudaEventDefault", ok("hipEventDefault", C::Event, Runtime)),
    ("cudaEventBlockingSync", ok("hipEventBlockingSync", C::Event, Runtime)),
    ("cudaEventDisableTiming", ok("hipEventDisableTiming", C::Event, Runtime)),
    ("cudaEventInterprocess", ok("hipEventInterprocess", C::Event, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: peer access
    // ------------------------------------------------------------------
    ("cudaDeviceCanAccessPeer", ok("hipDeviceCanAccessPeer", C::Peer, Runtime)),
    ("cudaDeviceEnablePeerAccess", ok("hipDeviceEnablePeerAccess", C::Peer, Runtime)),
    ("cudaDeviceDisablePeerAccess", ok("hipDeviceDisablePeerAccess", C::Peer, Runtime)),
    ("cudaMemcpyPeer", ok("hipMemcpyPeer", C::Peer, Runtime)),
    ("cudaMemcpyPeerAsync", ok("hipMemcpyPeerAsync", C::Peer, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: execution control, launch, occupancy, version
    // ------------------------------------------------------------------
    ("cudaLaunch", ok("hipLaunchByPtr", C::Exec, Runtime)),
    ("cudaConfigureCall", ok("hipConfigureCall", C::Exec, Runtime)),
    ("cudaSetupArgument", ok("hipSetupArgument", C::Exec, Runtime)),
    ("cudaFuncGetAttributes", unsup("", C::Exec, Runtime)),
    ("cudaOccupancyMaxPotentialBlockSize", unsup("", C::Occupancy, Runtime)),
    ("cudaOccupancyMaxActiveBlocksPerMultiprocessor", unsup("", C::Occupancy, Runtime)),
    ("cudaDriverGetVersion", ok("hipDriverGetVersion", C::Version, Runtime)),
    ("cudaRuntimeGetVersion", ok("hipRuntimeGetVersion", C::Version, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: textures
    // ------------------------------------------------------------------
    ("cudaCreateChannelDesc", ok("hipCreateChannelDesc", C::Tex, Runtime)),
    ("cudaBindTexture", ok("hipBindTexture", C::Tex, Runtime)),
    ("cudaBindTextureToArray", ok("hipBindTextureToArray", C::Tex, Runtime)),
    ("cudaUnbindTexture", ok("hipUnbindTexture", C::Tex, Runtime)),
    ("cudaGetChannelDesc", ok("hipGetChannelDesc", C::Tex, Runtime)),
    ("cudaCreateTextureObject", unsup("", C::Tex, Runtime)),
    ("cudaDestroyTextureObject", unsup("", C::Tex, Runtime)),
    ("cudaChannelFormatKindSigned", ok("hipChannelFormatKindSigned", C::Tex, Runtime)),
    ("cudaChannelFormatKindUnsigned", ok("hipChannelFormatKindUnsigned", C::Tex, Runtime)),
    ("cudaChannelFormatKindFloat", ok("hipChannelFormatKindFloat", C::Tex, Runtime)),
    ("cudaChannelFormatKindNone", ok("hipChannelFormatKindNone", C::Tex, Runtime)),
    // ------------------------------------------------------------------
    // Runtime API: device attributes
    // ------------------------------------------------------------------
    ("cudaDevAttrMaxThreadsPerBlock", ok("hipDeviceAttributeMaxThreadsPerBlock", C::Device, Runtime)),
    ("cudaDevAttrMaxBlockDimX", ok("hipDeviceAttributeMaxBlockDimX", C::Device, Runtime)),
    ("cudaDevAttrMaxBlockDimY", ok("hipDeviceAttributeMaxBlockDimY", C::Device, Runtime)),
    ("cudaDevAttrMaxBlockDimZ", ok("hipDeviceAttributeMaxBlockDimZ", C::Device, Runtime)),
    ("cudaDevAttrMaxGridDimX", ok("hipDeviceAttributeMaxGridDimX", C::Device, Runtime)),
    ("cudaDevAttrMaxGridDimY", ok("hipDeviceAttributeMaxGridDimY", C::Device, Runtime)),
    ("cudaDevAttrMaxGridDimZ", ok("hipDeviceAttributeMaxGridDimZ", C::Device, Runtime)),
    ("cudaDevAttrMaxSharedMemoryPerBlock", ok("hipDeviceAttributeMaxSharedMemoryPerBlock", C::Device, Runtime)),
    ("cudaDevAttrTotalConstantMemory", ok("hipDeviceAttributeTotalConstantMemory", C::Device, Runtime)),
    ("cudaDevAttrWarpSize", ok("hipDeviceAttributeWarpSize", C::Device, Runtime)),
    ("cudaDevAttrClockRate", ok("hipDeviceAttributeClockRate", C::Device, Runtime)),
    ("cudaDevAttrMultiProcessorCount", ok("hipDeviceAttributeMultiprocessorCount", C::Device, Runtime)),
    ("cudaDevAttrComputeCapabilityMajor", ok("hipDeviceAttributeComputeCapabilityMajor", C::Device, Runtime)),
    ("cudaDevAttrComputeCapabilityMinor", ok("hipDeviceAttributeComputeCapabilityMinor", C::Device, Runtime)),
    ("cudaDevAttrConcurrentKernels", ok("hipDeviceAttributeConcurrentKernels", C::Device, Runtime)),
    ("cudaDevAttrPciBusId", ok("hipDeviceAttributePciBusId", C::Device, Runtime)),
    ("cudaDevAttrPciDeviceId", ok("hipDeviceAttributePciDeviceId", C::Device, Runtime)),
    // ------------------------------------------------------------------
    // Coordinate builtins
    // ------------------------------------------------------------------
    ("threadIdx.x", ok("hipThreadIdx_x", C::CoordFunc, Runtime)),
    ("threadIdx.y", ok("hipThreadIdx_y", C::CoordFunc, Runtime)),
    ("threadIdx.z", ok("hipThreadIdx_z", C::CoordFunc, Runtime)),
    ("blockIdx.x", ok("hipBlockIdx_x", C::CoordFunc, Runtime)),
    ("blockIdx.y", ok("hipBlockIdx_y", C::CoordFunc, Runtime)),
    ("blockIdx.z", ok("hipBlockIdx_z", C::CoordFunc, Runtime)),
    ("blockDim.x", ok("hipBlockDim_x", C::CoordFunc, Runtime)),
    ("blockDim.y", ok("hipBlockDim_y", C::CoordFunc, Runtime)),
    ("blockDim.z", ok("hipBlockDim_z", C::CoordFunc, Runtime)),
    ("gridDim.x", ok("hipGridDim_x", C::CoordFunc, Runtime)),
    ("gridDim.y", ok("hipGridDim_y", C::CoordFunc, Runtime)),
    ("gridDim.z", ok("hipGridDim_z", C::CoordFunc, Runtime)),
    // ------------------------------------------------------------------
    // Defines
    // ------------------------------------------------------------------
    ("__CUDACC__", ok("__HIPCC__", C::Def, Runtime)),
    ("__CUDA_ARCH__", ok("__HIP_DEVICE_COMPILE__", C::Def, Runtime)),
    ("CUDART_VERSION", unsup("", C::Def, Runtime)),
    // ------------------------------------------------------------------
    // Driver API
    // ------------------------------------------------------------------
    ("cuInit", ok("hipInit", C::Init, Driver)),
    ("cuDriverGetVersion", ok("hipDriverGetVersion", C::Version, Driver)),
    ("cuDeviceGet", ok("hipDeviceGet", C::Device, Driver)),
    ("cuDeviceGetCount", ok("hipGetDeviceCount", C::Device, Driver)),
    ("cuDeviceGetName", ok("hipDeviceGetName", C::Device, Driver)),
    ("cuDeviceTotalMem", ok("hipDeviceTotalMem", C::Device, Driver)),
    ("cuDeviceComputeCapability", ok("hipDeviceComputeCapability", C::Device, Driver)),
    ("cuDeviceGetAttribute", ok("hipDeviceGetAttribute", C::Device, Driver)),
    ("cuCtxCreate", ok("hipCtxCreate", C::Context, Driver)),
    ("cuCtxDestroy", ok("hipCtxDestroy", C::Context, Driver)),
    ("cuCtxGetCurrent", ok("hipCtxGetCurrent", C::Context, Driver)),
    ("cuCtxSetCurrent", ok("hipCtxSetCurrent", C::Context, Driver)),
    ("cuCtxPushCurrent", ok("hipCtxPushCurrent", C::Context, Driver)),
    ("cuCtxPopCurrent", ok("hipCtxPopCurrent", C::Context, Driver)),
    ("cuCtxSynchronize", ok("hipCtxSynchronize", C::Context, Driver)),
    ("cuCtxGetDevice", ok("hipCtxGetDevice", C::Context, Driver)),
    ("cuCtxEnablePeerAccess", ok("hipCtxEnablePeerAccess", C::Peer, Driver)),
    ("cuCtxDisablePeerAccess", ok("hipCtxDisablePeerAccess", C::Peer, Driver)),
    ("cuModuleLoad", ok("hipModuleLoad", C::Module, Driver)),
    ("cuModuleLoadData", ok("hipModuleLoadData", C::Module, Driver)),
    ("cuModuleUnload", ok("hipModuleUnload", C::Module, Driver)),
    ("cuModuleGetFunction", ok("hipModuleGetFunction", C::Module, Driver)),
    ("cuModuleGetGlobal", ok("hipModuleGetGlobal", C::Module, Driver)),
    ("cuLaunchKernel", ok("hipModuleLaunchKernel", C::Exec, Driver)),
    ("cuMemAlloc", ok("hipMalloc", C::Mem, Driver)),
    ("cuMemFree", ok("hipFree", C::Mem, Driver)),
    ("cuMemAllocHost", ok("hipHostMalloc", C::Mem, Driver)),
    ("cuMemFreeHost", ok("hipHostFree", C::Mem, Driver)),
    ("cuMemcpyHtoD", ok("hipMemcpyHtoD", C::Mem, Driver)),
    ("cuMemcpyDtoH", ok("hipMemcpyDtoH", C::Mem, Driver)),
    ("cuMemcpyDtoD", ok("hipMemcpyDtoD", C::Mem, Driver)),
    ("cuMemcpyHtoDAsync", ok("hipMemcpyHtoDAsync", C::Mem, Driver)),
    ("cuMemcpyDtoHAsync", ok("hipMemcpyDtoHAsync", C::Mem, Driver)),
    ("cuMemGetInfo", ok("hipMemGetInfo", C::Mem, Driver)),
    ("cuMemGetAddressRange", unsup("", C::Mem, Driver)),
    ("cuMemAllocPitch", unsup("", C::Mem, Driver)),
    ("cuArrayCreate", unsup("", C::Mem, Driver)),
    ("cuArrayDestroy", unsup("", C::Mem, Driver)),
    ("cuStreamCreate", ok("hipStreamCreate", C::Stream, Driver)),
    ("cuStreamDestroy", ok("hipStreamDestroy", C::Stream, Driver)),
    ("cuStreamSynchronize", ok("hipStreamSynchronize", C::Stream, Driver)),
    ("cuStreamWaitEvent", ok("hipStreamWaitEvent", C::Stream, Driver)),
    ("cuEventCreate", ok("hipEventCreate", C::Event, Driver)),
    ("cuEventRecord", ok("hipEventRecord", C::Event, Driver)),
    ("cuEventDestroy", ok("hipEventDestroy", C::Event, Driver)),
    ("cuEventSynchronize", ok("hipEventSynchronize", C::Event, Driver)),
    ("cuEventElapsedTime", ok("hipEventElapsedTime", C::Event, Driver)),
    ("cuEventQuery", ok("hipEventQuery", C::Event, Driver)),
    ("cuFuncSetBlockShape", unsup("", C::Exec, Driver)),
    ("cuParamSetv", unsup("", C::Exec, Driver)),
    ("cuLaunchGrid", unsup("", C::Exec, Driver)),
    ("cuTexRefSetAddress", unsup("", C::Tex, Driver)),
    ("cuTexRefSetFormat", unsup("", C::Tex, Driver)),
    ("cuGraphicsMapResources", unsup("", C::Other, Driver)),
    ("cuGraphicsUnmapResources", unsup("", C::Other, Driver)),
    ("cuProfilerStart", unsup("", C::Other, Driver)),
    ("cuProfilerStop", unsup("", C::Other, Driver)),
    // Driver-API status values.
    ("CUDA_SUCCESS", ok("hipSuccess", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_INVALID_VALUE", ok("hipErrorInvalidValue", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_OUT_OF_MEMORY", ok("hipErrorMemoryAllocation", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_NOT_INITIALIZED", ok("hipErrorNotInitialized", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_DEINITIALIZED", ok("hipErrorDeinitialized", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_NO_DEVICE", ok("hipErrorNoDevice", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_INVALID_DEVICE", ok("hipErrorInvalidDevice", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_INVALID_CONTEXT", ok("hipErrorInvalidContext", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_LAUNCH_FAILED", ok("hipErrorLaunchFailure", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_LAUNCH_OUT_OF_RESOURCES", ok("hipErrorLaunchOutOfResources", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_NOT_READY", ok("hipErrorNotReady", C::NumericLiteral, Driver)),
    ("CUDA_ERROR_UNKNOWN", ok("hipErrorUnknown", C::NumericLiteral, Driver)),
    ("CU_CTX_SCHED_AUTO", ok("hipDeviceScheduleAuto", C::Context, Driver)),
    ("CU_CTX_SCHED_SPIN", ok("hipDeviceScheduleSpin", C::Context, Driver)),
    ("CU_CTX_SCHED_YIELD", ok("hipDeviceScheduleYield", C::Context, Driver)),
    ("CU_CTX_SCHED_BLOCKING_SYNC", ok("hipDeviceScheduleBlockingSync", C::Context, Driver)),
    ("CU_CTX_MAP_HOST", ok("hipDeviceMapHost", C::Context, Driver)),
    ("CU_EVENT_DEFAULT", ok("hipEventDefault", C::Event, Driver)),
    ("CU_EVENT_BLOCKING_SYNC", ok("hipEventBlockingSync", C::Event, Driver)),
    ("CU_EVENT_DISABLE_TIMING", ok("hipEventDisableTiming", C::Event, Driver)),
    ("CU_EVENT_INTERPROCESS", ok("hipEventInterprocess", C::Event, Driver)),
    ("CU_STREAM_DEFAULT", ok("hipStreamDefault", C::Stream, Driver)),
    ("CU_STREAM_NON_BLOCKING", ok("hipStreamNonBlocking", C::Stream, Driver)),
    ("CU_JIT_MAX_REGISTERS", unsup("", C::Module, Driver)),
    ("CU_JIT_INFO_LOG_BUFFER", unsup("", C::Module, Driver)),
    // ------------------------------------------------------------------
    // cuBLAS
    // ------------------------------------------------------------------
    ("cublasCreate", ok("hipblasCreate", C::Init, Blas)),
    ("cublasDestroy", ok("hipblasDestroy", C::Init, Blas)),
    ("cublasSetStream", ok("hipblasSetStream", C::Stream, Blas)),
    ("cublasGetStream", ok("hipblasGetStream", C::Stream, Blas)),
    ("cublasSetVector", ok("hipblasSetVector", C::Mem, Blas)),
    ("cublasGetVector", ok("hipblasGetVector", C::Mem, Blas)),
    ("cublasSetMatrix", ok("hipblasSetMatrix", C::Mem, Blas)),
    ("cublasGetMatrix", ok("hipblasGetMatrix", C::Mem, Blas)),
    ("cublasSgemm", ok("hipblasSgemm", C::MathFunc, Blas)),
    ("cublasDgemm", unsup("", C::MathFunc, Blas)),
    ("cublasSgemv", ok("hipblasSgemv", C::MathFunc, Blas)),
    ("cublasSaxpy", ok("hipblasSaxpy", C::MathFunc, Blas)),
    ("cublasSasum", ok("hipblasSasum", C::MathFunc, Blas)),
    ("cublasSscal", ok("hipblasSscal", C::MathFunc, Blas)),
    ("cublasScopy", ok("hipblasScopy", C::MathFunc, Blas)),
    ("cublasSdot", ok("hipblasSdot", C::MathFunc, Blas)),
    ("CUBLAS_STATUS_SUCCESS", ok("HIPBLAS_STATUS_SUCCESS", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_NOT_INITIALIZED", ok("HIPBLAS_STATUS_NOT_INITIALIZED", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_ALLOC_FAILED", ok("HIPBLAS_STATUS_ALLOC_FAILED", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_INVALID_VALUE", ok("HIPBLAS_STATUS_INVALID_VALUE", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_MAPPING_ERROR", ok("HIPBLAS_STATUS_MAPPING_ERROR", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_EXECUTION_FAILED", ok("HIPBLAS_STATUS_EXECUTION_FAILED", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_INTERNAL_ERROR", ok("HIPBLAS_STATUS_INTERNAL_ERROR", C::NumericLiteral, Blas)),
    ("CUBLAS_STATUS_NOT_SUPPORTED", ok("HIPBLAS_STATUS_NOT_SUPPORTED", C::NumericLiteral, Blas)),
    ("CUBLAS_OP_N", ok("HIPBLAS_OP_N", C::NumericLiteral, Blas)),
    ("CUBLAS_OP_T", ok("HIPBLAS_OP_T", C::NumericLiteral, Blas)),
    ("CUBLAS_OP_C", ok("HIPBLAS_OP_C", C::NumericLiteral, Blas)),
    // ------------------------------------------------------------------
    // cuRAND
    // ------------------------------------------------------------------
    ("curand_init", ok("hiprand_init", C::SpecialFunc, Runtime)),
    ("curand", ok("hiprand", C::SpecialFunc, Runtime)),
    ("curand_uniform", ok("hiprand_uniform", C::SpecialFunc, Runtime)),
    ("curand_normal", ok("hiprand_normal", C::SpecialFunc, Runtime)),
    ("curandCreateGenerator", ok("hiprandCreateGenerator", C::Init, Runtime)),
    ("curandDestroyGenerator", ok("hiprandDestroyGenerator", C::Init, Runtime)),
    ("curandSetPseudoRandomGeneratorSeed", ok("hiprandSetPseudoRandomGeneratorSeed", C::Init, Runtime)),
    ("curandGenerateUniform", ok("hiprandGenerateUniform", C::SpecialFunc, Runtime)),
];

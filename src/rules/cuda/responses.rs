//! Canned tutoring explanations, one per intent rule.
//!
//! These are the product text. They are returned exactly as written here,
//! byte for byte, so tests can assert on them and the host UI can rely on
//! stable wording. Edit with care; in particular `CODE_EXAMPLE` embeds a
//! complete kernel source listing whose layout matters to the reader.

pub const PLATFORM_DEFINITION: &str = "CUDA (Compute Unified Device Architecture) is NVIDIA's parallel computing platform and programming model. It allows developers to harness the power of GPUs for general-purpose computing, not just graphics. CUDA extends C/C++ with special syntax to define kernels - functions that run in parallel on hundreds or thousands of GPU cores simultaneously.";

pub const GPU_VS_CPU: &str = "Great question! CPUs are optimized for latency (fast single-threaded performance) with few cores (4-16), while GPUs are optimized for throughput with thousands of smaller cores. CPUs excel at complex branching and sequential tasks, while GPUs shine at parallel operations like vector math, image processing, and machine learning computations.";

pub const KERNELS: &str = "CUDA kernels are functions that execute on the GPU. They're defined with the __global__ qualifier and launched from host code. When you launch a kernel, you specify how many thread blocks and threads per block to use. Each thread executes the same kernel code but with different data - this is called SIMT (Single Instruction, Multiple Thread) execution.";

pub const MEMORY_HIERARCHY: &str = "GPU memory hierarchy is crucial for performance! Global memory is the largest but slowest (400-600 cycles latency). Shared memory is much faster (1-2 cycles) but limited per block. Constant memory is cached and great for read-only data. Registers are fastest but very limited. The key is to minimize global memory access and maximize memory coalescing.";

pub const THREADS_AND_BLOCKS: &str = "CUDA organizes threads hierarchically: threads are grouped into blocks, and blocks form a grid. Threads in the same block can share data via shared memory and synchronize with __syncthreads(). Your thread ID is calculated as blockIdx.x * blockDim.x + threadIdx.x for 1D grids. This hierarchy matches GPU hardware architecture!";

pub const SYNCHRONIZATION: &str = "Synchronization in CUDA is tricky! __syncthreads() only synchronizes threads within the same block, not across blocks. For global synchronization, you need to end the kernel and launch a new one. Avoid divergent branches before __syncthreads() as it can cause deadlocks. Warps (groups of 32 threads) execute in lockstep.";

pub const WARPS_AND_SIMT: &str = "Warps are fundamental to GPU execution! A warp is a group of 32 threads that execute the same instruction simultaneously (SIMT). When threads in a warp take different execution paths (branch divergence), performance degrades because both paths must be executed serially. Keep threads in a warp doing similar work for best performance.";

pub const MEMORY_COALESCING: &str = "Memory coalescing is critical for performance! When threads in a warp access consecutive memory addresses, the GPU combines these into a single transaction. Uncoalesced access can reduce bandwidth by 10x or more. Structure your data access patterns so thread 0 accesses address 0, thread 1 accesses address 1, etc.";

pub const OPTIMIZATION: &str = "CUDA optimization is an art! Key strategies: 1) Maximize occupancy (threads per SM), 2) Coalesce memory access, 3) Use shared memory to reduce global memory access, 4) Minimize divergent branching, 5) Choose optimal block sizes (multiples of 32), 6) Use streams for overlapping computation and memory transfer. Profile with nvprof or Nsight!";

/// The one reply with embedded source code: a complete, runnable kernel plus
/// its launch line, separated by blank lines for the chat renderer.
pub const CODE_EXAMPLE: &str = "Here's a simple vector addition kernel:\n\n__global__ void vectorAdd(float *a, float *b, float *c, int n) {\n    int i = blockIdx.x * blockDim.x + threadIdx.x;\n    if (i < n) c[i] = a[i] + b[i];\n}\n\nLaunch it with: vectorAdd<<<(n+255)/256, 256>>>(d_a, d_b, d_c, n);\n\nThis uses 256 threads per block and enough blocks to cover all elements. Try it in the code editor!";

pub const TROUBLESHOOTING: &str = "I'm here to help! Common CUDA issues: 1) Forgetting to check cudaGetLastError(), 2) Not handling partial blocks in kernels, 3) Race conditions in shared memory, 4) Exceeding resource limits (registers, shared memory), 5) Memory access violations. What specific problem are you facing? Feel free to paste your code!";

pub const GETTING_STARTED: &str = "Perfect! Let's start your CUDA journey. CUDA programming involves three main steps: 1) Allocate GPU memory with cudaMalloc(), 2) Copy data to GPU with cudaMemcpy(), 3) Launch kernels to process data in parallel, 4) Copy results back. The key insight is thinking in parallel - how can you break your problem into thousands of independent tasks?";

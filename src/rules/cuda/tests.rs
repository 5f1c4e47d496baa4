use crate::engine::{Catalog, FallbackPool, Matcher, Source};
use crate::rules::cuda::{fallbacks, responses, rules};

fn catalog() -> Catalog {
    Catalog::new(rules::get())
}

fn pool() -> FallbackPool {
    FallbackPool::seeded(fallbacks::TEMPLATES, 17)
}

fn resolve_source(catalog: &Catalog, pool: &FallbackPool, input: &str) -> Source {
    Matcher::new(input, catalog).run(pool).source
}

#[test]
fn intent_examples_matching() {
    // Array of (expected_tag, input_string)
    let cases: Vec<(&str, &str)> = vec![
        ("platform-definition", "what is cuda"),
        ("platform-definition", "What is CUDA?"),
        ("platform-definition", "Define CUDA please"),
        ("gpu-vs-cpu", "GPU vs CPU?"),
        ("gpu-vs-cpu", "why is a gpu faster than a cpu"),
        // Mentions "cuda", but rule one needs the whole phrase "what is cuda".
        ("gpu-vs-cpu", "how does CUDA split work between the GPU and the CPU?"),
        ("kernels", "what is a cuda kernel"),
        ("kernels", "how are kernels launched"),
        ("memory-hierarchy", "tell me about global memory"),
        // "memory access" belongs to the coalescing rule, but "memory" wins first.
        ("memory-hierarchy", "how do memory access patterns work"),
        ("threads-and-blocks", "how do threads map to blocks"),
        // "__syncthreads" contains "thread", so the thread rule owns it.
        ("threads-and-blocks", "why does __syncthreads() hang"),
        ("synchronization", "explain synchronization"),
        ("warps-and-simt", "what is warp divergence"),
        ("warps-and-simt", "explain simt"),
        ("memory-coalescing", "why does coalescing matter"),
        ("optimization", "optimization tips please"),
        ("optimization", "how can I improve performance"),
        ("code-example", "show me an example"),
        ("code-example", "can you write some code"),
        ("troubleshooting", "I'm stuck"),
        ("troubleshooting", "my program crashes with an error"),
        ("getting-started", "where do I start"),
        ("getting-started", "I'm a beginner"),
    ];

    let catalog = catalog();
    let pool = pool();

    for (expected_tag, input) in cases {
        match resolve_source(&catalog, &pool, input) {
            Source::Rule { tag, .. } => {
                assert_eq!(tag, expected_tag, "input '{}' routed to '{}', expected '{}'", input, tag, expected_tag);
            }
            Source::Fallback { .. } => {
                panic!("input '{}' fell back, expected rule '{}'", input, expected_tag);
            }
        }
    }
}

#[test]
fn unrecognized_inputs_fall_back() {
    let cases = ["xyzzy", "", "   ", "tell me about rust", "¿cómo estás?"];

    let catalog = catalog();
    let pool = pool();

    for input in cases {
        assert!(
            matches!(resolve_source(&catalog, &pool, input), Source::Fallback { .. }),
            "input '{}' matched a rule, expected fallback",
            input
        );
    }
}

#[test]
fn matched_replies_are_the_canned_texts() {
    let cases: Vec<(&str, &str)> = vec![
        ("what is cuda", responses::PLATFORM_DEFINITION),
        ("GPU vs CPU?", responses::GPU_VS_CPU),
        ("what is a cuda kernel", responses::KERNELS),
        ("tell me about global memory", responses::MEMORY_HIERARCHY),
        ("how do threads work", responses::THREADS_AND_BLOCKS),
        ("explain synchronization", responses::SYNCHRONIZATION),
        ("what is warp divergence", responses::WARPS_AND_SIMT),
        ("why does coalescing matter", responses::MEMORY_COALESCING),
        ("how can I improve performance", responses::OPTIMIZATION),
        ("show me an example", responses::CODE_EXAMPLE),
        ("I'm stuck", responses::TROUBLESHOOTING),
        ("where do I start", responses::GETTING_STARTED),
    ];

    let catalog = catalog();
    let pool = pool();

    for (input, expected) in cases {
        let resolution = Matcher::new(input, &catalog).run(&pool);
        assert_eq!(resolution.text, expected, "unexpected reply text for input '{}'", input);
    }
}

#[test]
fn code_example_embeds_the_kernel_listing() {
    let resolution = Matcher::new("show me an example", &catalog()).run(&pool());
    assert!(resolution.text.contains("__global__ void vectorAdd(float *a, float *b, float *c, int n) {"));
    assert!(resolution.text.contains("int i = blockIdx.x * blockDim.x + threadIdx.x;"));
    assert!(resolution.text.contains("vectorAdd<<<(n+255)/256, 256>>>(d_a, d_b, d_c, n);"));
}

#[test]
fn suggested_prompts_route_in_catalog_order() {
    // None of the starter questions may ever draw a fallback. The exact tags
    // pin down shadowing: "memory" beats "optimization", and "thread" beats
    // both "synchronization" and "help".
    let expected_tags = [
        "platform-definition",
        "gpu-vs-cpu",
        "threads-and-blocks",
        "kernels",
        "memory-hierarchy",
        "threads-and-blocks",
    ];

    let catalog = catalog();
    let pool = pool();

    assert_eq!(fallbacks::SUGGESTED_PROMPTS.len(), expected_tags.len());
    for (prompt, expected_tag) in fallbacks::SUGGESTED_PROMPTS.iter().zip(expected_tags) {
        match resolve_source(&catalog, &pool, prompt) {
            Source::Rule { tag, .. } => {
                assert_eq!(tag, expected_tag, "prompt '{}' routed unexpectedly", prompt);
            }
            Source::Fallback { .. } => panic!("suggested prompt '{}' fell back", prompt),
        }
    }
}

#[test]
fn catalog_shape_is_stable() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 12);
    assert_eq!(
        catalog.tags(),
        vec![
            "platform-definition",
            "gpu-vs-cpu",
            "kernels",
            "memory-hierarchy",
            "threads-and-blocks",
            "synchronization",
            "warps-and-simt",
            "memory-coalescing",
            "optimization",
            "code-example",
            "troubleshooting",
            "getting-started",
        ]
    );
    assert_eq!(fallbacks::TEMPLATES.len(), 4);
    for template in fallbacks::TEMPLATES {
        assert_eq!(template.matches(crate::engine::INPUT_SLOT).count(), 1, "bad template: {}", template);
    }
}

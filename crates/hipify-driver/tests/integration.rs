//! End-to-end tests for the translation jobs: real files in, real files
//! out.

use camino::Utf8PathBuf;
use hipify_driver::{TranslateOptions, TranslationJob};
use std::fs;

fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
    fs::write(&path, content).unwrap();
    path
}

const SAMPLE: &str = "\
#include <cuda_runtime.h>

int main() {
    float* p;
    cudaError_t err = cudaMalloc(&p, 256);
    if (err != cudaSuccess) {
        printf(\"error in cudaMalloc\\n\");
    }
    cudaFree(p);
    return 0;
}
";

const SAMPLE_HIP: &str = "\
#include <hip/hip_runtime.h>

int main() {
    float* p;
    hipError_t err = hipMalloc(&p, 256);
    if (err != hipSuccess) {
        printf(\"error in hipMalloc\\n\");
    }
    hipFree(p);
    return 0;
}
";

#[test]
fn test_default_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_input(&dir, "vec.cu", SAMPLE);

    let job = TranslationJob::new(src.clone(), TranslateOptions::default());
    let outcome = job.run().unwrap();

    assert_eq!(outcome.failures, 0);
    let translated = fs::read_to_string(format!("{src}.hip")).unwrap();
    assert_eq!(translated, SAMPLE_HIP);
    // Input untouched, tmp gone.
    assert_eq!(fs::read_to_string(&src).unwrap(), SAMPLE);
    assert!(!fs::exists(format!("{src}.hipify-tmp")).unwrap());
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_input(&dir, "vec.cu", SAMPLE);
    let out = Utf8PathBuf::from_path_buf(dir.path().join("translated.cpp")).unwrap();

    let opts = TranslateOptions {
        output: Some(out.clone()),
        ..Default::default()
    };
    TranslationJob::new(src, opts).run().unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), SAMPLE_HIP);
}

#[test]
fn test_no_output_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_input(&dir, "vec.cu", SAMPLE);

    let opts = TranslateOptions {
        no_output: true,
        ..Default::default()
    };
    let outcome = TranslationJob::new(src.clone(), opts).run().unwrap();

    // Stats were still gathered even though no file was produced.
    assert!(outcome.stats.supported_count() > 0);
    assert!(!fs::exists(format!("{src}.hip")).unwrap());
    assert!(!fs::exists(format!("{src}.hipify-tmp")).unwrap());
    assert_eq!(fs::read_to_string(&src).unwrap(), SAMPLE);
}

#[test]
fn test_inplace_with_backup() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_input(&dir, "vec.cu", SAMPLE);

    let opts = TranslateOptions {
        inplace: true,
        ..Default::default()
    };
    TranslationJob::new(src.clone(), opts).run().unwrap();

    assert_eq!(fs::read_to_string(&src).unwrap(), SAMPLE_HIP);
    let backup = fs::read_to_string(format!("{src}.prehip")).unwrap();
    assert_eq!(backup, SAMPLE);
}

#[test]
fn test_inplace_no_backup() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_input(&dir, "vec.cu", SAMPLE);

    let opts = TranslateOptions {
        inplace: true,
        no_backup: true,
        ..Default::default()
    };
    TranslationJob::new(src.clone(), opts).run().unwrap();

    assert_eq!(fs::read_to_string(&src).unwrap(), SAMPLE_HIP);
    assert!(!fs::exists(format!("{src}.prehip")).unwrap());
}

#[test]
fn test_clean_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let content = "int main() { return 0; }\n";
    let src = write_input(&dir, "plain.cpp", content);

    let outcome = TranslationJob::new(src.clone(), TranslateOptions::default())
        .run()
        .unwrap();

    assert_eq!(outcome.failures, 0);
    assert_eq!(outcome.stats.supported_count(), 0);
    assert_eq!(
        fs::read_to_string(format!("{src}.hip")).unwrap(),
        content
    );
}

#[test]
fn test_front_end_failure_still_applies_edits() {
    let dir = tempfile::tempdir().unwrap();
    // The unterminated string is a front-end error; the cudaFree call
    // before it must still be translated.
    let content = "void f() { cudaFree(p); }\nconst char* s = \"oops\n";
    let src = write_input(&dir, "broken.cu", content);

    let outcome = TranslationJob::new(src.clone(), TranslateOptions::default())
        .run()
        .unwrap();

    assert_eq!(outcome.failures, 1);
    let translated = fs::read_to_string(format!("{src}.hip")).unwrap();
    assert!(translated.contains("hipFree(p)"));
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = Utf8PathBuf::from_path_buf(dir.path().join("absent.cu")).unwrap();
    let err = TranslationJob::new(src, TranslateOptions::default())
        .run()
        .unwrap_err();
    assert!(err.to_string().contains("failed to copy"));
}

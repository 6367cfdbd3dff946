use super::*;

#[test]
fn test_extension() {
    assert_eq!(extension("src/app/render.js"), "js");
    assert_eq!(extension("archive.tar.gz"), "gz");
    assert_eq!(extension("Makefile"), "Makefile");
}

#[test]
fn test_directory_path_rejoins_with_last_segment() {
    for path in ["a/b", "src/app/system/render.js", "/abs/dir/file.txt", "a//b"] {
        let rebuilt = format!("{}/{}", directory_path(path), last_segment(path));
        assert_eq!(rebuilt, path);
    }
}

#[test]
fn test_directory_path_single_segment() {
    assert_eq!(directory_path("file.txt"), "");
    assert_eq!(directory_path(""), "");
}

#[test]
fn test_directory_path_keeps_leading_separator() {
    assert_eq!(directory_path("/file.txt"), "");
    assert_eq!(directory_path("/tmp/file.txt"), "/tmp");
}

#[test]
fn test_lower_path_zero_depth_is_identity() {
    for path in ["a/b/c/d.txt", "d.txt", "/x/y.js"] {
        assert_eq!(lower_path(path, 0), path);
    }
}

#[test]
fn test_lower_path_strips_leading_directories() {
    assert_eq!(lower_path("a/b/c/d.txt", 2), "c/d.txt");
    assert_eq!(lower_path("a/b/c/d.txt", 3), "d.txt");
}

#[test]
fn test_lower_path_never_strips_file_name() {
    assert_eq!(lower_path("a/d.txt", 5), "d.txt");
    assert_eq!(lower_path("d.txt", 1), "d.txt");
}

#[test]
fn test_has_extension() {
    assert!(has_extension("x/y/file.txt", "txt"));
    assert!(!has_extension("file", "txt"));
    assert!(!has_extension("x/y/file.txt", "js"));
}

#[test]
fn test_join() {
    assert_eq!(join("src", "main.js"), "src/main.js");
    assert_eq!(join("", "main.js"), "main.js");
}

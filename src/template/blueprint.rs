//! Fixed layout of a generated Drogon service module.
//!
//! Paths are minijinja templates relative to the base path. Bodies are embedded from
//! `templates/drogon/` at compile time.

/// How a file body turns into the content written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// The body is a template and is rendered with the service parameters.
    Rendered,
    /// The body is written byte-for-byte.
    Verbatim,
}

#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    pub path: &'static str,
    pub body: &'static str,
    pub kind: ContentKind,
}

pub const FOLDERS: [&str; 5] = [
    "{{ service_name }}/config/local",
    "{{ service_name }}/config/docker",
    "{{ service_name }}/controller",
    "{{ service_name }}/include/f_http",
    "{{ service_name }}/source",
];

pub const FILES: [FileTemplate; 8] = [
    FileTemplate {
        path: "{{ service_name }}/Dockerfile",
        body: include_str!("../../templates/drogon/Dockerfile.j2"),
        kind: ContentKind::Rendered,
    },
    FileTemplate {
        path: "{{ service_name }}/CMakeLists.txt",
        body: include_str!("../../templates/drogon/CMakeLists.txt.j2"),
        kind: ContentKind::Rendered,
    },
    FileTemplate {
        path: "{{ service_name }}/main.cpp",
        body: include_str!("../../templates/drogon/main.cpp.j2"),
        kind: ContentKind::Rendered,
    },
    FileTemplate {
        path: "{{ service_name }}/source/{{ service_name }}.cpp",
        body: include_str!("../../templates/drogon/source/service.cpp.j2"),
        kind: ContentKind::Rendered,
    },
    FileTemplate {
        path: "{{ service_name }}/controller/{{ service_name }}.hpp",
        body: include_str!("../../templates/drogon/controller/service.hpp.j2"),
        kind: ContentKind::Rendered,
    },
    FileTemplate {
        path: "{{ service_name }}/config/local/.env",
        body: include_str!("../../templates/drogon/config/local/.env"),
        kind: ContentKind::Verbatim,
    },
    FileTemplate {
        path: "{{ service_name }}/config/local/drogon_config.json",
        body: include_str!("../../templates/drogon/config/local/drogon_config.json"),
        kind: ContentKind::Verbatim,
    },
    FileTemplate {
        path: "{{ service_name }}/config/local/params.json",
        body: include_str!("../../templates/drogon/config/local/params.json"),
        kind: ContentKind::Verbatim,
    },
];

//! shadow-translate 命令行入口
//!
//! 从文件或标准输入读取一种 Shadow DOM 方言的文本，
//! 转换为另一种方言后写到标准输出；有损转换诊断经 tracing 输出到标准错误。

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use shadow_translate::core::{Diagnostics, TranslationOptions};
use shadow_translate::dom::{html_to_dom, serialize_document};
use shadow_translate::translators::{v0tov1, v1tov0};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// v1（slot/::slotted/attachShadow）→ v0（content/::content/createShadowRoot）
    ToV0,
    /// v0 → v1
    ToV1,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// 标记文本，按模式替换改写（不解析）
    Markup,
    /// 完整 HTML 文档，经 DOM 解析、树级转换后重新序列化
    ///
    /// 注意：rcdom 的序列化器不输出 `<template>` 的内容树，
    /// document 模式下 template 内部的节点会在输出中丢失；
    /// 需要保留 template 内容时请使用 markup 模式。
    Document,
    /// 样式表文本
    Css,
    /// 脚本文本
    Js,
}

#[derive(Parser)]
#[command(
    name = "shadow-translate",
    about = "Translates Shadow DOM v1 markup, styles and scripts to v0 and back",
    version
)]
struct Cli {
    /// 转换方向
    #[arg(short, long, value_enum)]
    direction: Direction,

    /// 输入文本类型
    #[arg(short, long, value_enum, default_value = "markup")]
    kind: Kind,

    /// document 模式下同时改写内嵌 <style> 文本
    #[arg(long)]
    styles: bool,

    /// document 模式下同时改写内嵌 <script> 文本
    #[arg(long)]
    scripts: bool,

    /// 输入文件（缺省时读标准输入）
    input: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let input = read_input(&cli.input);
    let mut diagnostics = Diagnostics::new();

    let output = match (cli.kind, cli.direction) {
        (Kind::Markup, Direction::ToV0) => v1tov0::translate_html(&input),
        (Kind::Markup, Direction::ToV1) => v0tov1::translate_html(&input),
        (Kind::Css, Direction::ToV0) => v1tov0::translate_css(&input),
        (Kind::Css, Direction::ToV1) => v0tov1::translate_css(&input, &mut diagnostics),
        (Kind::Js, Direction::ToV0) => v1tov0::translate_js(&input),
        (Kind::Js, Direction::ToV1) => v0tov1::translate_js(&input),
        (Kind::Document, direction) => {
            let options = TranslationOptions {
                translate_styles: cli.styles,
                translate_scripts: cli.scripts,
            };
            let dom = html_to_dom(&input);
            match direction {
                Direction::ToV0 => {
                    v1tov0::translate_fragment(&dom.document, &options);
                }
                Direction::ToV1 => {
                    v0tov1::translate_fragment(&dom.document, &options, &mut diagnostics);
                }
            }
            serialize_document(&dom)
        }
    };

    if let Err(error) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error: unable to write output ({})", error);
        process::exit(1);
    }
}

fn read_input(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Error: could not read {} ({})", path.display(), error);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error: could not read standard input ({})", error);
                process::exit(1);
            }
            buffer
        }
    }
}

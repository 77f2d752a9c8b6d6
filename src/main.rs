//! MeshView - OBJ 模型导入工具
//!
//! 按配置导入命令行给出的 OBJ 文件，并输出每个模型的摘要
//! （子网格、材质、顶点/三角形数量、包围盒）。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用 config.toml 中的导入选项
//! cargo run -- assets/cube.obj assets/sphere.obj
//!
//! # 命令行覆盖
//! cargo run -- --flip-uvs --tangents assets/cube.obj
//! ```
//!
//! # 流程
//!
//! ```text
//! config.toml + 命令行
//!        │
//! ┌──────▼──────┐
//! │    Core     │  配置 / 日志
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  ObjLoader  │  按顺序导入，遇到失败即停止
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   摘要输出   │
//! └─────────────┘
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use meshview::core::{log, Config};
use meshview::geometry::loaders::{ImportOptions, ModelLoader, ObjLoader};
use meshview::geometry::Model;
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数，剩余参数为模型路径
    let paths = config.apply_args(std::env::args().skip(1));

    // 3. 验证配置
    config.validate().context("Invalid configuration")?;

    // 4. 初始化日志系统
    let log_file = config
        .logging
        .file_output
        .then_some(config.logging.log_file.as_str());
    log::init_logger(config.logging.level, config.logging.file_output, log_file)
        .context("Failed to initialize logger")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = config.logging.level.as_str(),
        "MeshView starting..."
    );

    if paths.is_empty() {
        bail!("no model files given; usage: meshview [--flip-uvs] [--tangents] [--no-normals] [--weld] <file.obj>...");
    }

    let options = ImportOptions::from(&config.import);
    info!(
        generate_normals = options.generate_normals,
        generate_tangents = options.generate_tangents,
        flip_uvs = options.flip_uvs,
        weld_vertices = options.weld_vertices,
        "Import configuration"
    );

    // 5. 按顺序导入
    let loader = ObjLoader::with_options(options);
    let paths: Vec<&Path> = paths.iter().map(Path::new).collect();
    let models = loader.load_batch(&paths).context("Batch import failed")?;

    for model in &models {
        print_summary(model);
    }

    info!(count = models.len(), "All models imported");
    Ok(())
}

fn print_summary(model: &Model) {
    println!("模型: {}", model.name);
    println!("  顶点数: {}", model.total_vertex_count());
    println!("  三角形数: {}", model.total_triangle_count());
    println!(
        "  包围盒: [{:.3}, {:.3}, {:.3}] - [{:.3}, {:.3}, {:.3}]",
        model.bounds.min.x, model.bounds.min.y, model.bounds.min.z,
        model.bounds.max.x, model.bounds.max.y, model.bounds.max.z,
    );

    for (i, mesh) in model.meshes.iter().enumerate() {
        let material = model
            .material_for(mesh)
            .map(|m| m.name.as_str())
            .unwrap_or("-");
        println!(
            "  子网格 {} '{}': {} 个顶点, {} 个三角形, 材质 {}",
            i,
            mesh.name,
            mesh.vertex_count(),
            mesh.triangle_count(),
            material
        );
    }
}

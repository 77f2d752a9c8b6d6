/// OBJ 模型导入示例
///
/// 演示如何使用 MeshView 的 geometry 模块导入 OBJ 文件并检查结果。
///
/// 运行方式：
/// ```
/// cargo run --example load_obj -- assets/sphere.obj
/// ```

use meshview::geometry::loaders::{ModelLoader, ObjLoader};
use std::path::PathBuf;

fn main() {
    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== MeshView OBJ 导入示例 ===\n");

    let obj_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/sphere.obj"));

    println!("正在加载: {}", obj_path.display());

    let mut loader = ObjLoader::new();
    loader.set_generate_tangents(true);

    let model = match loader.load_from_file(&obj_path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("\n✗ 加载失败: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n✓ 加载成功！\n");
    println!("模型信息:");
    println!("  名称: {}", model.name);
    println!("  子网格数: {}", model.meshes.len());
    println!("  材质数: {}", model.materials.len());
    println!("  顶点数: {}", model.total_vertex_count());
    println!("  索引数: {}", model.total_index_count());
    println!("  包围盒中心: {:?}", model.bounds.center());
    println!("  包围盒尺寸: {:?}", model.bounds.extent());

    for (i, mesh) in model.meshes.iter().enumerate() {
        println!("\n子网格 {} '{}':", i, mesh.name);
        println!("  三角形数: {}", mesh.triangle_count());
        if let Some(material) = model.material_for(mesh) {
            println!("  材质: {} (diffuse {:?})", material.name, material.diffuse);
        }

        // 显示前几个顶点的数据
        for (j, vertex) in mesh.vertices.iter().take(3).enumerate() {
            println!("  顶点 {}:", j);
            println!("    位置: [{:.3}, {:.3}, {:.3}]",
                vertex.position[0], vertex.position[1], vertex.position[2]);
            println!("    法线: [{:.3}, {:.3}, {:.3}]",
                vertex.normal[0], vertex.normal[1], vertex.normal[2]);
            println!("    UV: [{:.3}, {:.3}]",
                vertex.texcoord[0], vertex.texcoord[1]);
            println!("    切线: [{:.3}, {:.3}, {:.3}]",
                vertex.tangent[0], vertex.tangent[1], vertex.tangent[2]);
        }

        match mesh.validate() {
            Ok(()) => println!("  ✓ 数据验证通过"),
            Err(e) => println!("  ✗ 数据验证失败: {}", e),
        }
    }

    println!("\n=== 示例完成 ===");
}

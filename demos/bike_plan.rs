//! 多層 BOM 計劃生成示例

use production_plan::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 腳踏車生產計劃生成示例 ===\n");

    // 銷售訂單：100 台登山車
    let sales_orders = MemorySalesOrderRepository::new()
        .with_order(SalesOrder::new("SO-DEMO-001").with_line("BIKE-001", Decimal::from(100)));

    // 三層 BOM，車架帶 5% 損耗
    let boms = MemoryBomRepository::new()
        .with_bom(
            BomRecord::new("BIKE-001", "登山車")
                .with_component(
                    ComponentLine::sub_assembly("FRAME-001", "車架", Decimal::from(1))
                        .with_scrap(Decimal::from(5)),
                )
                .with_component(ComponentLine::sub_assembly(
                    "WHEEL-001",
                    "輪組",
                    Decimal::from(2),
                ))
                .with_operation(OperationLine::new("Drilling", "DRILL-PRESS", Decimal::from(2)))
                .with_operation(OperationLine::new(
                    "Assembly",
                    "ASSEMBLY-LINE",
                    Decimal::from(30),
                )),
        )
        .with_bom(
            BomRecord::new("FRAME-001", "車架")
                .with_component(ComponentLine::raw_material(
                    "STEEL-TUBE",
                    "鋼管",
                    Decimal::from(3),
                ))
                .with_operation(OperationLine::new("Welding", "WELD-STATION", Decimal::from(5))),
        )
        .with_bom(
            BomRecord::new("WHEEL-001", "輪組").with_component(ComponentLine::raw_material(
                "SPOKE",
                "輻條",
                Decimal::from(36),
            )),
        );

    let items = MemoryItemRepository::new()
        .with_item(
            ItemRecord::new("STEEL-TUBE", "鋼管")
                .with_group("Raw Material")
                .with_rate(Decimal::from(120)),
        )
        .with_item(
            ItemRecord::new("SPOKE", "輻條")
                .with_group("Raw Material")
                .with_rate(Decimal::from(3)),
        );

    let workstations = MemoryWorkstationRepository::new()
        .with_rate("DRILL-PRESS", Decimal::from(600))
        .with_rate("ASSEMBLY-LINE", Decimal::from(300))
        .with_rate("WELD-STATION", Decimal::from(480));

    let store = MemoryPlanStore::new();

    let service = PlanningService::new(&sales_orders, &boms, &items, &workstations, &store);
    let result = service.generate_and_save("SO-DEMO-001", &CancelToken::new())?;
    let plan = result.plan;

    println!("計劃編號: {}（狀態: {:?}）\n", plan.plan_id, plan.status);

    println!("成品:");
    for fg in &plan.finished_goods {
        println!("  - {} {}：{}", fg.item_code, fg.item_name, fg.planned_qty);
    }

    println!("\n半成品:");
    for sa in &plan.sub_assemblies {
        println!(
            "  - {} {}：損耗前 {}、損耗後 {}（損耗 {}%）",
            sa.item_code,
            sa.item_name,
            sa.planned_qty_before_scrap,
            sa.planned_qty,
            sa.scrap_percentage
        );
    }

    println!("\n原材料:");
    for rm in &plan.raw_materials {
        println!(
            "  - {} {}：{} × {} = {}",
            rm.item_code, rm.item_name, rm.total_qty, rm.rate, rm.total_amount
        );
    }

    println!("\n工序（半成品層級）:");
    for op in &plan.operations {
        println!(
            "  - {} @ {}：{} 分鐘，成本 {}",
            op.operation_name, op.workstation_type, op.total_time_minutes, op.total_cost
        );
    }

    println!("\n工序（成品層級）:");
    for op in &plan.fg_operations {
        println!(
            "  - {} @ {}：{} 分鐘，成本 {}",
            op.operation_name, op.workstation_type, op.total_time_minutes, op.total_cost
        );
    }

    for warning in &result.warnings {
        println!("警告: [{}] {}", warning.subject, warning.message);
    }

    Ok(())
}
